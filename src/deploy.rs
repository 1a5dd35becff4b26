//! The deploy operation.
//!
//! Evaluates the guard chain, selects the release channel, and hands the
//! build output to the transfer client. The two phases are split so that no
//! transfer client is ever constructed for a skipped deploy.

use std::path::Path;

use crate::channel::ReleaseChannel;
use crate::ci::CiEnvironment;
use crate::config::Config;
use crate::error::Result;
use crate::ftp::{TransferClient, TransferSummary};
use crate::guard::{self, SkipReason};
use crate::source;

/// Outcome of the guard phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// A guard failed; the deploy is intentionally skipped
    Skip(SkipReason),
    /// Every guard passed; deploy to the selected destination
    Proceed {
        channel: ReleaseChannel,
        destination: String,
    },
}

/// Evaluate the guard chain and select the destination path.
///
/// Performs no I/O. Callers construct the transfer client only on
/// [Decision::Proceed], so a skipped deploy never touches the network.
pub fn decide(config: &Config, ci: &CiEnvironment) -> Decision {
    if let Some(reason) = guard::check(config, ci) {
        return Decision::Skip(reason);
    }

    let channel = ReleaseChannel::from_tag(ci.tag());
    let destination = channel.remote_path(config).to_string();

    Decision::Proceed {
        channel,
        destination,
    }
}

/// Enumerate the build output and hand it to the transfer client.
///
/// Enumeration and transfer failures propagate unmodified; there is no retry
/// or partial-failure recovery at this layer.
pub fn run(
    source_root: &Path,
    destination: &str,
    client: &dyn TransferClient,
) -> Result<TransferSummary> {
    let files = source::collect(source_root)?;
    client.upload_all(destination, &files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ftp::MockTransfer;
    use std::fs;
    use tempfile::TempDir;

    fn ci(secure: &str, pr: &str, tag: &str, branch: &str) -> CiEnvironment {
        CiEnvironment::new(secure, pr, tag, branch)
    }

    #[test]
    fn test_decide_skips_without_secure_vars() {
        let config = Config::default();
        let decision = decide(&config, &ci("", "false", "", "master"));
        assert_eq!(decision, Decision::Skip(SkipReason::SecureVarsMissing));
    }

    #[test]
    fn test_decide_skips_pull_requests() {
        let config = Config::default();
        let decision = decide(&config, &ci("true", "17", "", "master"));
        assert_eq!(decision, Decision::Skip(SkipReason::PullRequest));
    }

    #[test]
    fn test_decide_skips_other_branches() {
        let config = Config::default();
        let decision = decide(&config, &ci("true", "false", "", "develop"));
        assert_eq!(decision, Decision::Skip(SkipReason::NonReleaseBranch));
    }

    #[test]
    fn test_untagged_master_build_goes_to_beta() {
        let config = Config::default();
        let decision = decide(&config, &ci("true", "false", "", "master"));
        assert_eq!(
            decision,
            Decision::Proceed {
                channel: ReleaseChannel::Beta,
                destination: "/beta".to_string(),
            }
        );
    }

    #[test]
    fn test_tagged_build_goes_to_release() {
        let config = Config::default();
        let decision = decide(&config, &ci("true", "false", "v1.0", "master"));
        assert_eq!(
            decision,
            Decision::Proceed {
                channel: ReleaseChannel::Release,
                destination: "/release".to_string(),
            }
        );
    }

    #[test]
    fn test_run_hands_files_to_client() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "<html>").unwrap();
        fs::create_dir(dir.path().join("css")).unwrap();
        fs::write(dir.path().join("css/app.css"), "body{}").unwrap();

        let client = MockTransfer::new();
        let summary = run(dir.path(), "/beta", &client).unwrap();

        assert_eq!(summary.files, 2);
        let uploads = client.uploads();
        assert_eq!(uploads.len(), 2);
        assert!(uploads
            .iter()
            .any(|u| u.remote_path == "/beta/index.html"));
        assert!(uploads.iter().any(|u| u.remote_path == "/beta/css/app.css"));
    }

    #[test]
    fn test_run_propagates_enumeration_failure() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("build");

        let client = MockTransfer::new();
        let err = run(&missing, "/beta", &client).unwrap_err();

        assert!(err.to_string().contains("build directory not found"));
        assert!(client.uploads().is_empty());
    }

    #[test]
    fn test_run_propagates_transfer_failure() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "<html>").unwrap();

        let client = MockTransfer::failing("550 permission denied");
        let err = run(dir.path(), "/release", &client).unwrap_err();

        assert!(err.to_string().contains("550 permission denied"));
    }
}
