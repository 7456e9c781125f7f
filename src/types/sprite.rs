//! Fixed-size RGBA sprite.

use std::sync::Arc;

use image::RgbaImage;

use crate::error::{AssetError, Result};

/// Bytes per pixel in every sprite buffer (RGBA8).
pub const BYTES_PER_PIXEL: usize = 4;

/// A sprite: a 1-based id plus an immutable row-major RGBA8 buffer.
///
/// Cloning and renumbering share the pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub id: u32,
    width: u32,
    height: u32,
    rgba: Arc<[u8]>,
}

impl Sprite {
    /// Create a sprite, checking that the buffer holds exactly
    /// `width * height` RGBA pixels.
    pub fn new(id: u32, width: u32, height: u32, rgba: impl Into<Arc<[u8]>>) -> Result<Self> {
        let rgba = rgba.into();
        let expected = byte_len(width, height).ok_or_else(|| {
            AssetError::precondition(format!("sprite {} dimensions {}x{} overflow", id, width, height))
        })?;

        if rgba.len() != expected {
            return Err(AssetError::precondition(format!(
                "sprite {} is {}x{} and needs {} bytes, got {}",
                id,
                width,
                height,
                expected,
                rgba.len()
            )));
        }

        Ok(Self {
            id,
            width,
            height,
            rgba,
        })
    }

    /// Build a sprite from a decoded image.
    pub fn from_image(id: u32, image: &RgbaImage) -> Result<Self> {
        Self::new(id, image.width(), image.height(), image.as_raw().as_slice())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// The same pixels under a different id.
    pub fn with_id(&self, id: u32) -> Self {
        Self {
            id,
            width: self.width,
            height: self.height,
            rgba: Arc::clone(&self.rgba),
        }
    }

    /// Whether both sprites point at the same pixel allocation.
    pub fn shares_pixels(&self, other: &Sprite) -> bool {
        Arc::ptr_eq(&self.rgba, &other.rgba)
    }

    /// Copy the pixels into an image buffer.
    pub fn to_image(&self) -> Result<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.rgba.to_vec()).ok_or_else(|| {
            AssetError::precondition(format!(
                "sprite {} buffer does not fit {}x{}",
                self.id, self.width, self.height
            ))
        })
    }
}

/// Byte length of a `width x height` RGBA buffer, `None` on overflow.
pub fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}
