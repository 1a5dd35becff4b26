use std::fmt;

use crate::ci::CiEnvironment;
use crate::config::Config;

/// Reasons a deploy is intentionally skipped.
/// A skip is a successful outcome that should be reported to the user, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The runner did not expose decrypted secure variables
    SecureVarsMissing,
    /// The build belongs to a pull request
    PullRequest,
    /// Untagged build from a branch other than the deploy branch
    NonReleaseBranch,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::SecureVarsMissing => {
                write!(f, "Secure environment variables missing")
            }
            SkipReason::PullRequest => write!(f, "Disabled for pull requests"),
            SkipReason::NonReleaseBranch => write!(f, "Only master branch deploys"),
        }
    }
}

/// Evaluate the guard chain in order, returning the first failing guard.
///
/// The guards short-circuit: once one fails, later conditions are not
/// consulted. `None` means every guard passed and the deploy may proceed.
///
/// 1. Secure variables must be available (`TRAVIS_SECURE_ENV_VARS == "true"`)
/// 2. Pull request builds never deploy (`TRAVIS_PULL_REQUEST == "false"`)
/// 3. A release tag is present, or the branch is the configured deploy branch
pub fn check(config: &Config, ci: &CiEnvironment) -> Option<SkipReason> {
    if !ci.has_secure_vars() {
        return Some(SkipReason::SecureVarsMissing);
    }

    if ci.is_pull_request() {
        return Some(SkipReason::PullRequest);
    }

    if !ci.has_release_tag() && ci.branch() != config.behavior.deploy_branch {
        return Some(SkipReason::NonReleaseBranch);
    }

    None
}
