//! File transfer abstraction layer
//!
//! This module provides a trait-based abstraction over the transfer client,
//! allowing for a real FTP implementation and a mock implementation for
//! testing.
//!
//! The primary abstraction is the [TransferClient] trait. The concrete
//! implementations include:
//!
//! - [client::FtpTransfer]: A real implementation using the `suppaftp` crate
//! - [mock::MockTransfer]: A mock implementation for testing
//!
//! Most code should depend on the [TransferClient] trait rather than concrete
//! implementations to enable easy testing and flexibility.

pub mod client;
pub mod mock;

pub use client::FtpTransfer;
pub use mock::MockTransfer;

use crate::error::Result;
use crate::source::SourceFile;

/// Aggregate result of a transfer run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransferSummary {
    /// Number of files uploaded
    pub files: usize,
    /// Total bytes written to the remote side
    pub bytes: u64,
}

/// Common transfer operation trait for abstraction
///
/// The client owns everything below the handoff: connection management,
/// per-file scheduling across its configured parallelism, and the wire
/// protocol. Callers hand over the destination and the file set and observe
/// only the aggregate outcome. No guarantee is made about the completion
/// order of individual files.
///
/// All implementors must be `Send + Sync` to allow the client to be shared
/// with its upload workers.
///
/// ```
/// use ftp_deploy::ftp::{MockTransfer, TransferClient};
///
/// let client = MockTransfer::new();
/// let summary = client.upload_all("/beta", &[]).unwrap();
/// assert_eq!(summary.files, 0);
/// ```
pub trait TransferClient: Send + Sync {
    /// Upload every file to `destination`, preserving relative paths
    ///
    /// # Arguments
    /// * `destination` - Remote base path (e.g., "/release", "/beta")
    /// * `files` - Local files with their remote path suffixes
    ///
    /// # Returns
    /// * `Ok(TransferSummary)` - Aggregate count and size of uploaded files
    /// * `Err` - The first failure raised by any connection or upload
    fn upload_all(&self, destination: &str, files: &[SourceFile]) -> Result<TransferSummary>;
}
