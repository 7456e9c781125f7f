//! Slice-sheet command implementation.
//!
//! Cuts a PNG into a grid of tiles and packs them into a sprite sheet.

use std::path::PathBuf;

use clap::Args;

use crate::codec::write_sheet_file;
use crate::config::Config;
use crate::error::{AssetError, Result};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{dedupe_sprites, slice_sheet};

/// Slice a PNG into tiles and pack them into a sprite sheet
#[derive(Args, Debug)]
pub struct SliceArgs {
    /// PNG file to slice
    #[arg(long)]
    pub png: PathBuf,

    /// Sprite sheet to write
    #[arg(long, short)]
    pub out: PathBuf,

    /// Tile size as N or WxH (default: `tile_size` from the config)
    #[arg(long)]
    pub tile: Option<String>,

    /// Drop tiles whose pixels repeat an earlier tile
    #[arg(long)]
    pub dedupe: bool,
}

/// Parse a tile size: "32" for square tiles or "WxH".
fn parse_tile(s: &str) -> Result<(u32, u32)> {
    let (w, h) = s.split_once(|c| c == 'x' || c == 'X').unwrap_or((s, s));

    let w: u32 = w.trim().parse().map_err(|_| AssetError::Parse {
        message: format!("Invalid tile width '{}' in '{}'", w, s),
        help: Some("Use N or WxH, for example: 32, 16x32".to_string()),
    })?;
    let h: u32 = h.trim().parse().map_err(|_| AssetError::Parse {
        message: format!("Invalid tile height '{}' in '{}'", h, s),
        help: Some("Use N or WxH, for example: 32, 16x32".to_string()),
    })?;

    if w == 0 || h == 0 {
        return Err(AssetError::Parse {
            message: format!("Tile size must be non-zero, got {}x{}", w, h),
            help: Some("Both width and height must be at least 1".to_string()),
        });
    }

    Ok((w, h))
}

pub fn run(args: SliceArgs, config: &Config, printer: &Printer) -> Result<()> {
    let path = &args.png;
    let display = display_path(path);

    if path.extension().and_then(|e| e.to_str()) != Some("png") {
        printer.warning("Warning", &format!("{} does not have a .png extension", display));
    }

    let (tile_w, tile_h) = match &args.tile {
        Some(tile) => parse_tile(tile)?,
        None => (config.tile_size, config.tile_size),
    };

    printer.status("Loading", &display);
    let img = image::open(path)
        .map_err(|e| AssetError::io_at(path, "Failed to load image", e))?
        .to_rgba8();

    if img.width() % tile_w != 0 || img.height() % tile_h != 0 {
        printer.warning(
            "Warning",
            &format!(
                "{}x{} image is not a multiple of {}x{}; partial edge tiles dropped",
                img.width(),
                img.height(),
                tile_w,
                tile_h
            ),
        );
    }

    let mut sprites = slice_sheet(&img, tile_w, tile_h)?;
    printer.info(
        "Sliced",
        &format!(
            "{} ({}x{} tiles)",
            plural(sprites.len(), "tile", "tiles"),
            tile_w,
            tile_h
        ),
    );

    if args.dedupe {
        let before = sprites.len();
        sprites = dedupe_sprites(&sprites);
        printer.verbose(
            "Dedupe",
            &format!("{} duplicate(s) removed", before - sprites.len()),
        );
    }

    write_sheet_file(&args.out, &sprites)?;
    printer.success(
        "Packed",
        &format!(
            "{} into {}",
            plural(sprites.len(), "sprite", "sprites"),
            display_path(&args.out)
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::read_sheet_file;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_parse_tile_square() {
        assert_eq!(parse_tile("32").unwrap(), (32, 32));
    }

    #[test]
    fn test_parse_tile_rectangular() {
        assert_eq!(parse_tile("8x16").unwrap(), (8, 16));
        assert_eq!(parse_tile("8X16").unwrap(), (8, 16));
    }

    #[test]
    fn test_parse_tile_invalid() {
        assert!(parse_tile("abc").is_err());
        assert!(parse_tile("8x").is_err());
    }

    #[test]
    fn test_parse_tile_zero() {
        assert!(parse_tile("0").is_err());
        assert!(parse_tile("16x0").is_err());
    }

    #[test]
    fn test_slice_and_dedupe() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("tiles.png");
        // top row of tiles red, bottom row blue
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
        for x in 0..4 {
            for y in 2..4 {
                img.put_pixel(x, y, Rgba([0, 0, 255, 255]));
            }
        }
        img.save(&png).unwrap();

        let out = dir.path().join("tiles.sheet");
        run(
            SliceArgs {
                png,
                out: out.clone(),
                tile: Some("2".to_string()),
                dedupe: true,
            },
            &Config::default(),
            &Printer::new(),
        )
        .unwrap();

        let sprites = read_sheet_file(&out).unwrap();
        assert_eq!(sprites.len(), 2);
        assert_eq!(sprites[1].rgba()[2], 255);
    }

    #[test]
    fn test_config_tile_size() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("sheet.png");
        RgbaImage::from_pixel(64, 64, Rgba([1, 2, 3, 255])).save(&png).unwrap();

        let out = dir.path().join("sheet.sheet");
        run(
            SliceArgs {
                png,
                out: out.clone(),
                tile: None,
                dedupe: false,
            },
            &Config::default(),
            &Printer::new(),
        )
        .unwrap();

        assert_eq!(read_sheet_file(&out).unwrap().len(), 4);
    }
}
