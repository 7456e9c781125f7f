//! PNG import/export for individual sprites.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssetError, Result};
use crate::types::Sprite;

/// File name used for an exported sprite, e.g. `sprite_0007.png`.
pub fn sprite_file_name(id: u32) -> String {
    format!("sprite_{:04}.png", id)
}

/// Write a sprite to a PNG file.
pub fn write_sprite_png(sprite: &Sprite, path: &Path) -> Result<()> {
    let img = sprite.to_image()?;
    img.save(path)
        .map_err(|e| AssetError::io_at(path, "Failed to write PNG", e))
}

/// Read a PNG file as a sprite with the given id.
pub fn read_sprite_png(path: &Path, id: u32) -> Result<Sprite> {
    let img = image::open(path)
        .map_err(|e| AssetError::io_at(path, "Failed to load image", e))?
        .to_rgba8();
    Sprite::from_image(id, &img)
}

/// Export sprites as `sprite_NNNN.png` files.
///
/// With `split`, each sprite goes into its own sub-directory named after its
/// id. Returns the written paths in sprite order.
pub fn export_sprites(sprites: &[Sprite], dir: &Path, split: bool) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| AssetError::io_at(dir, "Failed to create output directory", e))?;

    let mut written = Vec::with_capacity(sprites.len());
    for sprite in sprites {
        let target_dir = if split {
            let sub = dir.join(sprite.id.to_string());
            fs::create_dir_all(&sub).map_err(|e| AssetError::io_at(&sub, "Failed to create directory", e))?;
            sub
        } else {
            dir.to_path_buf()
        };

        let path = target_dir.join(sprite_file_name(sprite.id));
        write_sprite_png(sprite, &path)?;
        written.push(path);
    }
    Ok(written)
}
