//! File-level pipeline built on the codecs and the legacy mapper.
//!
//! - `convert` - whole-bundle V11 ↔ legacy conversion
//! - `pool` - assembling sprite pools from sheet files or PNG directories
//! - `slicer` - cutting sheet images into tiles, de-duplicating sprites
//! - `png` - single-sprite PNG import/export

mod convert;
mod png;
mod pool;
mod slicer;

pub use convert::{
    convert_to_legacy, convert_to_v11, write_legacy_bundle, write_v11_bundle, LegacyBundle,
    V11Bundle, APPEARANCES_FILENAME, ITEMS_FILENAME, LEGACY_SPRITES_DIR, SHEET_FILENAME,
};
pub use png::{export_sprites, read_sprite_png, sprite_file_name, write_sprite_png};
pub use pool::{find_files, load_png_sprites, load_sprite_pool};
pub use slicer::{dedupe_sprites, slice_sheet};
