use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{FtpDeployError, Result};
use crate::ftp::{TransferClient, TransferSummary};
use crate::source::SourceFile;

/// One recorded upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    pub destination: String,
    pub remote_path: String,
    pub local_path: PathBuf,
}

/// Mock transfer client for testing without network access
pub struct MockTransfer {
    uploads: Mutex<Vec<UploadRecord>>,
    failure: Option<String>,
}

impl MockTransfer {
    /// Create a mock that accepts every upload
    pub fn new() -> Self {
        MockTransfer {
            uploads: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Create a mock whose upload call fails with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        MockTransfer {
            uploads: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    /// Snapshot of the uploads recorded so far
    pub fn uploads(&self) -> Vec<UploadRecord> {
        self.uploads.lock().expect("uploads mutex poisoned").clone()
    }
}

impl Default for MockTransfer {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferClient for MockTransfer {
    fn upload_all(&self, destination: &str, files: &[SourceFile]) -> Result<TransferSummary> {
        if let Some(message) = &self.failure {
            return Err(FtpDeployError::transfer(message.clone()));
        }

        let mut summary = TransferSummary::default();
        let mut uploads = self.uploads.lock().expect("uploads mutex poisoned");

        for file in files {
            uploads.push(UploadRecord {
                destination: destination.to_string(),
                remote_path: format!(
                    "{}/{}",
                    destination.trim_end_matches('/'),
                    file.remote_suffix()
                ),
                local_path: file.path.clone(),
            });

            summary.files += 1;
            summary.bytes += fs::metadata(&file.path).map(|m| m.len()).unwrap_or(0);
        }

        Ok(summary)
    }
}
