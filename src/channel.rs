use std::fmt;

use crate::config::Config;

/// The release channel a build deploys to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseChannel {
    /// Tagged release build
    Release,
    /// Ordinary commit on the deploy branch
    Beta,
}

impl ReleaseChannel {
    /// Derive the channel from the release tag signal
    pub fn from_tag(tag: &str) -> Self {
        if tag.is_empty() {
            ReleaseChannel::Beta
        } else {
            ReleaseChannel::Release
        }
    }

    /// The remote destination path configured for this channel
    pub fn remote_path<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            ReleaseChannel::Release => &config.paths.release,
            ReleaseChannel::Beta => &config.paths.beta,
        }
    }
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseChannel::Release => write!(f, "release"),
            ReleaseChannel::Beta => write!(f, "beta"),
        }
    }
}
