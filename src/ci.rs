//! Travis CI environment access.
//!
//! All deploy decisions are driven by variables the CI runner exports.
//! Variables are read once into a [CiEnvironment] snapshot; a variable that
//! is not set reads as the empty string, matching the falsy comparisons the
//! guard chain performs.

use std::env;

use crate::error::{FtpDeployError, Result};

pub const SECURE_ENV_VARS: &str = "TRAVIS_SECURE_ENV_VARS";
pub const PULL_REQUEST: &str = "TRAVIS_PULL_REQUEST";
pub const TAG: &str = "TRAVIS_TAG";
pub const BRANCH: &str = "TRAVIS_BRANCH";

pub const FTP_HOST: &str = "FTP_HOST";
pub const FTP_USER: &str = "FTP_USER";
pub const FTP_PASS: &str = "FTP_PASS";

/// Snapshot of the CI variables that gate a deploy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiEnvironment {
    secure_env_vars: String,
    pull_request: String,
    tag: String,
    branch: String,
}

impl CiEnvironment {
    /// Build a snapshot with explicit values
    pub fn new(
        secure_env_vars: impl Into<String>,
        pull_request: impl Into<String>,
        tag: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        CiEnvironment {
            secure_env_vars: secure_env_vars.into(),
            pull_request: pull_request.into(),
            tag: tag.into(),
            branch: branch.into(),
        }
    }

    /// Read the snapshot from the process environment
    pub fn from_env() -> Self {
        CiEnvironment {
            secure_env_vars: env::var(SECURE_ENV_VARS).unwrap_or_default(),
            pull_request: env::var(PULL_REQUEST).unwrap_or_default(),
            tag: env::var(TAG).unwrap_or_default(),
            branch: env::var(BRANCH).unwrap_or_default(),
        }
    }

    /// Whether the runner exposed decrypted secure variables to this build
    pub fn has_secure_vars(&self) -> bool {
        self.secure_env_vars == "true"
    }

    /// Whether this build belongs to a pull request
    pub fn is_pull_request(&self) -> bool {
        self.pull_request != "false"
    }

    /// Whether this build corresponds to a tagged release
    pub fn has_release_tag(&self) -> bool {
        !self.tag.is_empty()
    }

    /// The release tag value, empty for ordinary commits
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The branch this build was triggered from
    pub fn branch(&self) -> &str {
        &self.branch
    }
}

/// FTP credentials read from the environment.
///
/// Only looked up after the guard chain has passed; a missing variable at
/// that point is a hard error that propagates to the runner, never a skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub host: String,
    pub user: String,
    pub password: String,
}

impl Credentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Ok(Credentials {
            host: require(FTP_HOST)?,
            user: require(FTP_USER)?,
            password: require(FTP_PASS)?,
        })
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).map_err(|_| FtpDeployError::env(format!("{} is not set", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_travis_vars() {
        for name in [SECURE_ENV_VARS, PULL_REQUEST, TAG, BRANCH] {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_secure_vars_flag() {
        let env = CiEnvironment::new("true", "false", "", "master");
        assert!(env.has_secure_vars());

        let env = CiEnvironment::new("false", "false", "", "master");
        assert!(!env.has_secure_vars());

        // Anything other than the literal "true" does not count
        let env = CiEnvironment::new("TRUE", "false", "", "master");
        assert!(!env.has_secure_vars());
    }

    #[test]
    fn test_pull_request_flag() {
        // Travis sets the PR number for pull requests, "false" otherwise
        let env = CiEnvironment::new("true", "123", "", "master");
        assert!(env.is_pull_request());

        let env = CiEnvironment::new("true", "false", "", "master");
        assert!(!env.is_pull_request());

        // A missing variable reads as empty, which is not "false"
        let env = CiEnvironment::new("true", "", "", "master");
        assert!(env.is_pull_request());
    }

    #[test]
    fn test_release_tag_presence() {
        let env = CiEnvironment::new("true", "false", "v1.0", "master");
        assert!(env.has_release_tag());

        let env = CiEnvironment::new("true", "false", "", "master");
        assert!(!env.has_release_tag());
    }

    #[test]
    #[serial]
    fn test_from_env_missing_vars_read_as_empty() {
        clear_travis_vars();

        let ci = CiEnvironment::from_env();
        assert_eq!(ci, CiEnvironment::new("", "", "", ""));
        assert!(!ci.has_secure_vars());
        assert!(ci.is_pull_request());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_travis_vars() {
        clear_travis_vars();
        env::set_var(SECURE_ENV_VARS, "true");
        env::set_var(PULL_REQUEST, "false");
        env::set_var(TAG, "v2.1");
        env::set_var(BRANCH, "master");

        let ci = CiEnvironment::from_env();
        assert!(ci.has_secure_vars());
        assert!(!ci.is_pull_request());
        assert_eq!(ci.tag(), "v2.1");
        assert_eq!(ci.branch(), "master");

        clear_travis_vars();
    }

    #[test]
    #[serial]
    fn test_credentials_from_env() {
        env::set_var(FTP_HOST, "ftp.example.com");
        env::set_var(FTP_USER, "deployer");
        env::set_var(FTP_PASS, "secret");

        let creds = Credentials::from_env().unwrap();
        assert_eq!(creds.host, "ftp.example.com");
        assert_eq!(creds.user, "deployer");
        assert_eq!(creds.password, "secret");

        for name in [FTP_HOST, FTP_USER, FTP_PASS] {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_credentials_missing_var_is_error() {
        for name in [FTP_HOST, FTP_USER, FTP_PASS] {
            env::remove_var(name);
        }

        let err = Credentials::from_env().unwrap_err();
        assert!(err.to_string().contains(FTP_HOST));
    }
}
