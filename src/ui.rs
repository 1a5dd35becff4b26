//! Console output formatting.
//!
//! Pure formatting functions plus thin print wrappers. Deploy progress and
//! skip messages go to standard output; errors go to standard error.

use crate::ftp::TransferSummary;
use crate::guard::SkipReason;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// The message logged when a guard fails
pub fn skip_line(reason: &SkipReason) -> String {
    format!("Skipping deploy. {}.", reason)
}

/// Print the skip message for a failed guard
pub fn display_skip(reason: &SkipReason) {
    println!("{}", skip_line(reason));
}

/// One-line summary of a completed transfer
pub fn summary_line(destination: &str, summary: &TransferSummary) -> String {
    format!(
        "Deployed {} files ({} bytes) to {}",
        summary.files, summary.bytes, destination
    )
}
