//! Core domain types for assetsuite.
//!
//! - `Appearance`, `FrameGroup`, `Frame` - the modern appearance model
//! - `Sprite` - an id plus an immutable RGBA8 pixel buffer
//! - `ItemType`, `Attributes` - the legacy flat item model

mod appearance;
mod item;
mod sprite;

pub use appearance::{Appearance, Frame, FrameGroup, DEFAULT_FRAME_DURATION};
pub use item::{Attributes, ItemType, FRAME_ATTRIBUTE_PREFIX, TYPE_ATTRIBUTE};
pub use sprite::{byte_len, Sprite, BYTES_PER_PIXEL};
