use std::collections::HashSet;
use std::fs::File;
use std::thread;

use crossbeam_channel::{bounded, Receiver};
use suppaftp::types::FileType;
use suppaftp::FtpStream;

use crate::ci::Credentials;
use crate::error::{FtpDeployError, Result};
use crate::ftp::{TransferClient, TransferSummary};
use crate::source::SourceFile;
use crate::ui;

/// FTP transfer client backed by `suppaftp`.
///
/// Opens up to `parallelism` connections, each owned by one upload worker.
/// Workers pull files from a shared bounded queue, so the client schedules
/// transfers internally and callers only see the aggregate result.
pub struct FtpTransfer {
    host: String,
    port: u16,
    user: String,
    password: String,
    parallelism: usize,
}

impl FtpTransfer {
    /// Create a client from credentials and transfer tuning
    pub fn new(credentials: Credentials, port: u16, parallelism: usize) -> Self {
        FtpTransfer {
            host: credentials.host,
            port,
            user: credentials.user,
            password: credentials.password,
            parallelism,
        }
    }

    /// Open, authenticate, and switch one connection to binary mode
    fn connect(&self) -> Result<FtpStream> {
        let mut stream = FtpStream::connect((self.host.as_str(), self.port))?;
        stream.login(&self.user, &self.password)?;
        stream.transfer_type(FileType::Binary)?;
        Ok(stream)
    }

    /// One upload worker: a dedicated connection draining the shared queue
    fn upload_worker(&self, destination: &str, rx: Receiver<SourceFile>) -> Result<TransferSummary> {
        let mut ftp = self.connect()?;
        let mut created: HashSet<String> = HashSet::new();
        let mut summary = TransferSummary::default();

        for file in rx.iter() {
            let remote = join_remote(destination, &file.remote_suffix());

            for dir in parent_dirs(&remote) {
                if created.insert(dir.clone()) {
                    // The directory may already exist on the server; failures
                    // that matter surface at the upload itself
                    let _ = ftp.mkdir(&dir);
                }
            }

            let mut reader = File::open(&file.path)?;
            let bytes = ftp.put_file(&remote, &mut reader)?;

            summary.files += 1;
            summary.bytes += bytes;
            ui::display_status(&format!("Uploaded {}", remote));
        }

        ftp.quit()?;
        Ok(summary)
    }
}

impl TransferClient for FtpTransfer {
    fn upload_all(&self, destination: &str, files: &[SourceFile]) -> Result<TransferSummary> {
        if files.is_empty() {
            return Ok(TransferSummary::default());
        }

        let workers = self.parallelism.clamp(1, files.len());
        let (tx, rx) = bounded::<SourceFile>(workers * 2);

        let mut results: Vec<Result<TransferSummary>> = Vec::with_capacity(workers);
        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(workers);
            for _ in 0..workers {
                let rx = rx.clone();
                handles.push(scope.spawn(move || self.upload_worker(destination, rx)));
            }
            drop(rx);

            for file in files {
                // Send fails only once every worker has hung up
                if tx.send(file.clone()).is_err() {
                    break;
                }
            }
            drop(tx);

            for handle in handles {
                let result = handle
                    .join()
                    .map_err(|_| FtpDeployError::transfer("upload worker panicked"))
                    .and_then(|r| r);
                results.push(result);
            }
        });

        let mut summary = TransferSummary::default();
        for result in results {
            let worker_summary = result?;
            summary.files += worker_summary.files;
            summary.bytes += worker_summary.bytes;
        }

        Ok(summary)
    }
}

/// Join the destination base path and a file's relative suffix
fn join_remote(destination: &str, suffix: &str) -> String {
    format!("{}/{}", destination.trim_end_matches('/'), suffix)
}

/// Every directory that must exist for `remote_path`, shallowest first
fn parent_dirs(remote_path: &str) -> Vec<String> {
    let parent = match remote_path.rsplit_once('/') {
        Some((parent, _)) if !parent.is_empty() => parent,
        _ => return Vec::new(),
    };

    let absolute = parent.starts_with('/');
    let mut dirs = Vec::new();
    let mut acc = String::new();

    for (i, seg) in parent.split('/').filter(|s| !s.is_empty()).enumerate() {
        if i > 0 || absolute {
            acc.push('/');
        }
        acc.push_str(seg);
        dirs.push(acc.clone());
    }

    dirs
}
