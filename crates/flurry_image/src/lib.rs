//! Flurry Image
//!
//! Bitmap loading for particle sprites.
//!
//! Decoding is done with the `image` crate, either inline with
//! [`ImageData::load`] or on a worker thread with [`SpriteAsset::spawn_load`].
//! Renderers never wait on a sprite: they poll [`SpriteAsset::is_ready`] and
//! skip drawing until the decoded bitmap has been published.

mod error;
mod loader;
mod sprite;

pub use error::{ImageError, Result};
pub use loader::ImageData;
pub use sprite::SpriteAsset;
