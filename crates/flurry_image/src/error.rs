//! Image error types

use thiserror::Error;

/// Errors raised while loading or decoding an image
#[derive(Error, Debug)]
pub enum ImageError {
    /// Failed to read the image file
    #[error("Failed to load image file: {0}")]
    FileLoad(String),

    /// Failed to decode the image bytes
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Image has no pixels
    #[error("Image has zero size: {0}x{1}")]
    Empty(u32, u32),
}

impl From<image::ImageError> for ImageError {
    fn from(err: image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}

/// Result type for image operations
pub type Result<T> = std::result::Result<T, ImageError>;
