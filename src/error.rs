use thiserror::Error;

/// Unified error type for ftp-deploy operations
#[derive(Error, Debug)]
pub enum FtpDeployError {
    #[error("Environment error: {0}")]
    Env(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source enumeration error: {0}")]
    Source(String),

    #[error("Transfer failed: {0}")]
    Transfer(String),

    #[error("FTP operation failed: {0}")]
    Ftp(#[from] suppaftp::FtpError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in ftp-deploy
pub type Result<T> = std::result::Result<T, FtpDeployError>;

impl FtpDeployError {
    /// Create an environment error with context
    pub fn env(msg: impl Into<String>) -> Self {
        FtpDeployError::Env(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        FtpDeployError::Config(msg.into())
    }

    /// Create a source enumeration error with context
    pub fn source(msg: impl Into<String>) -> Self {
        FtpDeployError::Source(msg.into())
    }

    /// Create a transfer error with context
    pub fn transfer(msg: impl Into<String>) -> Self {
        FtpDeployError::Transfer(msg.into())
    }
}
