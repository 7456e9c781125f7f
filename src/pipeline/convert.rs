//! Whole-bundle conversion between the V11 and legacy layouts.
//!
//! The converters work on decoded models and return encoded outputs in
//! memory; `write_*_bundle` puts them on disk.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::codec::{encode_sheet, write_appearances, write_items};
use crate::error::{AssetError, Result};
use crate::legacy::{items_to_appearances, map_to_legacy, DanglingSpriteRef, MapOptions};
use crate::types::{Appearance, ItemType, Sprite};

use super::png::export_sprites;

pub const ITEMS_FILENAME: &str = "items.json";
pub const LEGACY_SPRITES_DIR: &str = "sprites";
pub const APPEARANCES_FILENAME: &str = "appearances.json";
pub const SHEET_FILENAME: &str = "sprites.sheet";

/// Legacy output of a V11 conversion.
#[derive(Debug, Clone)]
pub struct LegacyBundle {
    pub items: Vec<ItemType>,
    /// `items` encoded as a legacy item list.
    pub items_json: Vec<u8>,
    /// Renumbered sprites in legacy archive order.
    pub sprites: Vec<Sprite>,
    pub dangling: Vec<DanglingSpriteRef>,
}

/// V11 output of a legacy conversion.
#[derive(Debug, Clone)]
pub struct V11Bundle {
    pub appearances: Vec<Appearance>,
    pub appearances_json: Vec<u8>,
    /// Encoded SPSH sheet holding every sprite.
    pub sheet: Vec<u8>,
}

/// Map appearances and their sprite pool to legacy items and sprites.
pub fn convert_to_legacy(
    appearances: &[Appearance],
    sprites: &[Sprite],
    options: MapOptions,
) -> Result<LegacyBundle> {
    let mapped = map_to_legacy(appearances, sprites, options);

    if !mapped.dangling.is_empty() {
        warn!(
            count = mapped.dangling.len(),
            pool = sprites.len(),
            "skipped sprite references outside the sprite pool"
        );
    }
    info!(
        items = mapped.items.len(),
        sprites = mapped.sprites.len(),
        "mapped appearances to legacy items"
    );

    let mut items_json = Vec::new();
    write_items(&mapped.items, &mut items_json)?;

    Ok(LegacyBundle {
        items: mapped.items,
        items_json,
        sprites: mapped.sprites,
        dangling: mapped.dangling,
    })
}

/// Turn legacy items and sprites into an appearance document and a sheet.
pub fn convert_to_v11(items: &[ItemType], sprites: &[Sprite]) -> Result<V11Bundle> {
    let appearances = items_to_appearances(items);

    let mut appearances_json = Vec::new();
    write_appearances(&appearances, &mut appearances_json)?;
    let sheet = encode_sheet(sprites)?;

    info!(
        appearances = appearances.len(),
        sprites = sprites.len(),
        sheet_bytes = sheet.len(),
        "converted legacy items to V11"
    );

    Ok(V11Bundle {
        appearances,
        appearances_json,
        sheet,
    })
}

/// Write `items.json` and `sprites/sprite_NNNN.png` under `dir`.
pub fn write_legacy_bundle(bundle: &LegacyBundle, dir: &Path) -> Result<()> {
    create_dir(dir)?;
    write_file(&dir.join(ITEMS_FILENAME), &bundle.items_json)?;
    export_sprites(&bundle.sprites, &dir.join(LEGACY_SPRITES_DIR), false)?;
    Ok(())
}

/// Write `appearances.json` and `sprites.sheet` under `dir`.
pub fn write_v11_bundle(bundle: &V11Bundle, dir: &Path) -> Result<()> {
    create_dir(dir)?;
    write_file(&dir.join(APPEARANCES_FILENAME), &bundle.appearances_json)?;
    write_file(&dir.join(SHEET_FILENAME), &bundle.sheet)?;
    Ok(())
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| AssetError::io_at(dir, "Failed to create output directory", e))
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| AssetError::io_at(path, "Failed to write file", e))
}
