//! Error types for flurry_app

use flurry_platform::PlatformError;
use thiserror::Error;

/// Errors that can occur while configuring or running the application
#[derive(Error, Debug)]
pub enum AppError {
    /// Failed to read or parse a configuration file
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read or parse a scene script
    #[error("Scene error: {0}")]
    Scene(String),

    /// Platform error (window creation, event script)
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),
}

/// Result type for flurry_app operations
pub type Result<T> = std::result::Result<T, AppError>;
