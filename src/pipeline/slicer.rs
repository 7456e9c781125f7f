//! Cut a sheet image into fixed-size sprites.

use std::collections::HashSet;

use image::RgbaImage;

use crate::error::{AssetError, Result};
use crate::types::Sprite;

/// Split an image into a row-major grid of `tile_width x tile_height` sprites.
///
/// Sprites are numbered from 1. Partial cells on the right and bottom edges
/// are dropped.
pub fn slice_sheet(image: &RgbaImage, tile_width: u32, tile_height: u32) -> Result<Vec<Sprite>> {
    if tile_width == 0 || tile_height == 0 {
        return Err(AssetError::precondition(format!(
            "tile size must be non-zero, got {}x{}",
            tile_width, tile_height
        )));
    }

    let cols = image.width() / tile_width;
    let rows = image.height() / tile_height;
    let mut sprites = Vec::with_capacity((cols * rows) as usize);

    for row in 0..rows {
        for col in 0..cols {
            let tile = image::imageops::crop_imm(
                image,
                col * tile_width,
                row * tile_height,
                tile_width,
                tile_height,
            )
            .to_image();
            let id = sprites.len() as u32 + 1;
            sprites.push(Sprite::from_image(id, &tile)?);
        }
    }

    Ok(sprites)
}

/// Drop sprites whose dimensions and pixels repeat an earlier sprite.
///
/// Order and ids of the kept sprites are unchanged.
pub fn dedupe_sprites(sprites: &[Sprite]) -> Vec<Sprite> {
    let mut seen: HashSet<(u32, u32, &[u8])> = HashSet::new();
    sprites
        .iter()
        .filter(|&s| seen.insert((s.width(), s.height(), s.rgba())))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_slice_row_major() {
        // 4x4 image, each 2x2 quadrant a different red value
        let mut img = RgbaImage::new(4, 4);
        for (x, y, px) in img.enumerate_pixels_mut() {
            let quadrant = (y / 2) * 2 + x / 2;
            *px = Rgba([quadrant as u8 * 10, 0, 0, 255]);
        }

        let sprites = slice_sheet(&img, 2, 2).unwrap();

        assert_eq!(sprites.len(), 4);
        for (i, sprite) in sprites.iter().enumerate() {
            assert_eq!(sprite.id, i as u32 + 1);
            assert_eq!((sprite.width(), sprite.height()), (2, 2));
            assert_eq!(sprite.rgba()[0], i as u8 * 10);
        }
    }

    #[test]
    fn test_slice_default_tile_count() {
        let img = RgbaImage::from_pixel(64, 64, Rgba([255, 0, 0, 255]));
        assert_eq!(slice_sheet(&img, 32, 32).unwrap().len(), 4);
    }

    #[test]
    fn test_slice_drops_partial_edges() {
        let img = RgbaImage::from_pixel(5, 3, Rgba([0, 0, 0, 255]));
        assert_eq!(slice_sheet(&img, 2, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_slice_rejects_zero_tile() {
        let img = RgbaImage::new(4, 4);
        assert!(slice_sheet(&img, 0, 4).is_err());
    }

    #[test]
    fn test_dedupe_keeps_first() {
        let a = Sprite::new(1, 1, 1, vec![1u8, 2, 3, 4]).unwrap();
        let b = Sprite::new(2, 1, 1, vec![9u8, 9, 9, 9]).unwrap();
        let a_again = Sprite::new(3, 1, 1, vec![1u8, 2, 3, 4]).unwrap();
        let tall = Sprite::new(4, 1, 2, vec![0u8; 8]).unwrap();
        let wide = Sprite::new(5, 2, 1, vec![0u8; 8]).unwrap();

        let kept = dedupe_sprites(&[a, b, a_again, tall, wide]);
        let ids: Vec<u32> = kept.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }
}
