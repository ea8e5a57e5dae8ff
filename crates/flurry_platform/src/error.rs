//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Failed to create window
    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    /// Event scheduled outside the scripted run
    #[error("Invalid event script: {0}")]
    InvalidScript(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
