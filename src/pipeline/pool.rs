//! Sprite pool assembly from sheet files and PNG directories.
//!
//! A pool is a flat sprite list where position `i` is sprite id `i + 1`.
//! Files are always taken in file-name order so pools are reproducible.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::codec::read_sheet_file;
use crate::error::{AssetError, Result};
use crate::types::Sprite;

/// List files directly inside `dir` with the given extension, sorted by name.
pub fn find_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AssetError::io_at(dir, "Not a directory", "expected a directory of assets"));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| AssetError::io_at(dir, "Failed to scan directory", e))?;
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));

        if entry.file_type().is_file() && matches {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Read each sheet in order and concatenate their sprites.
///
/// Ids are renumbered `1..=n` across the whole pool. A failing sheet fails
/// the whole pool.
pub fn load_sprite_pool(paths: &[PathBuf]) -> Result<Vec<Sprite>> {
    let mut pool: Vec<Sprite> = Vec::new();

    for path in paths {
        let sheet = read_sheet_file(path)?;
        debug!(path = %path.display(), sprites = sheet.len(), "loaded sprite sheet");

        let offset = pool.len() as u32;
        pool.extend(sheet.iter().map(|s| s.with_id(offset + s.id)));
    }

    Ok(pool)
}

/// Load PNG files as sprites numbered `1..=n` in the given order.
pub fn load_png_sprites(paths: &[PathBuf]) -> Result<Vec<Sprite>> {
    paths
        .iter()
        .zip(1u32..)
        .map(|(path, id)| super::png::read_sprite_png(path, id))
        .collect()
}
