//! Sprite assets with an observable decode-complete flag

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::thread::JoinHandle;

use flurry_core::ImageId;

use crate::error::Result;
use crate::loader::ImageData;

/// A bitmap that may still be decoding
///
/// Clones share the same slot. The slot is written at most once, so a sprite
/// observed as ready stays ready.
#[derive(Clone, Debug)]
pub struct SpriteAsset {
    id: ImageId,
    slot: Arc<OnceLock<ImageData>>,
}

impl SpriteAsset {
    /// Create a sprite whose bitmap has not been decoded yet
    pub fn pending(id: ImageId) -> Self {
        Self {
            id,
            slot: Arc::new(OnceLock::new()),
        }
    }

    /// Create a sprite from an already decoded bitmap
    pub fn ready(id: ImageId, data: ImageData) -> Self {
        let sprite = Self::pending(id);
        sprite.publish(data);
        sprite
    }

    /// Decode a sprite file on the calling thread
    pub fn load(id: ImageId, path: impl Into<PathBuf>) -> Result<Self> {
        let data = ImageData::load(path.into())?;
        Ok(Self::ready(id, data))
    }

    /// Decode a sprite file on a worker thread
    ///
    /// Returns immediately with a pending sprite. A failed decode is logged
    /// and leaves the sprite pending for good.
    pub fn spawn_load(id: ImageId, path: impl Into<PathBuf>) -> (Self, JoinHandle<()>) {
        let sprite = Self::pending(id);
        let path = path.into();
        let publisher = sprite.clone();

        let handle = std::thread::spawn(move || match ImageData::load(&path) {
            Ok(data) => {
                tracing::info!(
                    "Sprite {:?} decoded from {} ({}x{})",
                    publisher.id,
                    path.display(),
                    data.width(),
                    data.height()
                );
                publisher.publish(data);
            }
            Err(e) => {
                tracing::warn!("Sprite {:?} failed to load: {}", publisher.id, e);
            }
        });

        (sprite, handle)
    }

    /// Publish decoded data
    ///
    /// Returns `false` if the sprite was already ready; the first bitmap wins.
    pub fn publish(&self, data: ImageData) -> bool {
        self.slot.set(data).is_ok()
    }

    /// Whether decoding has completed
    pub fn is_ready(&self) -> bool {
        self.slot.get().is_some()
    }

    /// The handle renderers draw this sprite with
    pub fn image_id(&self) -> ImageId {
        self.id
    }

    /// The decoded bitmap, if ready
    pub fn data(&self) -> Option<&ImageData> {
        self.slot.get()
    }
}
