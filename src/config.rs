use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{FtpDeployError, Result};

/// Represents the complete configuration for ftp-deploy.
///
/// Contains the build output location, remote path mapping, transfer tuning, and behavior options.
/// All values have defaults matching a standard Travis CI web-build layout, so the tool runs
/// without any configuration file present.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub transfer: TransferConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: SourceConfig::default(),
            paths: PathsConfig::default(),
            transfer: TransferConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

/// Returns the default build output directory.
fn default_source_dir() -> String {
    "build".to_string()
}

/// Configuration for the local build output to upload.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SourceConfig {
    #[serde(default = "default_source_dir")]
    pub dir: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            dir: default_source_dir(),
        }
    }
}

fn default_release_path() -> String {
    "/release".to_string()
}

fn default_beta_path() -> String {
    "/beta".to_string()
}

/// Remote destination paths per release channel.
///
/// Tagged builds land under `release`, untagged builds from the deploy branch under `beta`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PathsConfig {
    #[serde(default = "default_release_path")]
    pub release: String,

    #[serde(default = "default_beta_path")]
    pub beta: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            release: default_release_path(),
            beta: default_beta_path(),
        }
    }
}

fn default_parallelism() -> usize {
    5
}

fn default_port() -> u16 {
    21
}

/// Transfer client tuning.
///
/// `parallelism` is the number of simultaneous FTP connections the client may open;
/// the client owns all scheduling across them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TransferConfig {
    #[serde(default = "default_parallelism")]
    pub parallelism: usize,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for TransferConfig {
    fn default() -> Self {
        TransferConfig {
            parallelism: default_parallelism(),
            port: default_port(),
        }
    }
}

fn default_deploy_branch() -> String {
    "master".to_string()
}

/// Configuration for behavior customization.
///
/// Controls which branch is allowed to deploy untagged builds.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default = "default_deploy_branch")]
    pub deploy_branch: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            deploy_branch: default_deploy_branch(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `ftpdeploy.toml` in current directory
/// 3. `~/.config/.ftpdeploy.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./ftpdeploy.toml").exists() {
        fs::read_to_string("./ftpdeploy.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".ftpdeploy.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| FtpDeployError::config(e.to_string()))?;
    Ok(config)
}
