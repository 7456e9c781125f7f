//! SPSH sprite sheet container.
//!
//! Layout, little-endian:
//!
//! | offset | field          | type  |
//! |--------|----------------|-------|
//! | 0      | magic `SPSH`   | u32   |
//! | 4      | width          | i32   |
//! | 8      | height         | i32   |
//! | 12     | count          | i32   |
//! | 16     | payload length | i32   |
//! | 20     | payload        | bytes |
//!
//! The payload is the compressed concatenation of every sprite's RGBA
//! buffer. Sprite ids are not stored; decoding numbers sprites `1..=count`
//! in payload order.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use byteorder::{ReadBytesExt, WriteBytesExt, LE};

use crate::error::{AssetError, Result};
use crate::types::{byte_len, Sprite};

use super::compress::{compress, decompress_capped};

/// `SPSH` packed little-endian.
pub const SHEET_MAGIC: u32 = 0x4853_5053;

/// Size of the fixed header in bytes.
pub const HEADER_LEN: usize = 20;

/// Decode every sprite stored in a sheet.
pub fn read_sheet<R: Read>(mut reader: R) -> Result<Vec<Sprite>> {
    let magic = reader.read_u32::<LE>().map_err(truncated("magic"))?;
    if magic != SHEET_MAGIC {
        return Err(AssetError::UnsupportedFormat {
            found: magic,
            expected: SHEET_MAGIC,
        });
    }

    let width = reader.read_i32::<LE>().map_err(truncated("width"))?;
    let height = reader.read_i32::<LE>().map_err(truncated("height"))?;
    let count = reader.read_i32::<LE>().map_err(truncated("count"))?;
    if count < 0 {
        return Err(AssetError::corrupt(format!("negative sprite count {}", count)));
    }

    let payload_len = reader.read_i32::<LE>().map_err(truncated("payload length"))?;
    if payload_len < 0 {
        return Err(AssetError::corrupt(format!(
            "negative payload length {}",
            payload_len
        )));
    }
    if width <= 0 || height <= 0 {
        return Err(AssetError::corrupt(format!(
            "invalid sprite dimensions {}x{}",
            width, height
        )));
    }

    let mut compressed = Vec::new();
    reader
        .by_ref()
        .take(payload_len as u64)
        .read_to_end(&mut compressed)?;
    if compressed.len() != payload_len as usize {
        return Err(AssetError::corrupt(format!(
            "payload truncated: header declares {} bytes, stream held {}",
            payload_len,
            compressed.len()
        )));
    }

    let (width, height) = (width as u32, height as u32);
    let sprite_size = byte_len(width, height)
        .ok_or_else(|| AssetError::corrupt(format!("sprite size {}x{} overflows", width, height)))?;
    let expected = sprite_size
        .checked_mul(count as usize)
        .ok_or_else(|| AssetError::corrupt(format!("{} sprites of {}x{} overflow", count, width, height)))?;

    let raw = decompress_capped(&compressed, expected)?;
    if raw.len() != expected {
        return Err(AssetError::corrupt(format!(
            "header declares {} sprites of {}x{} ({} bytes) but the payload inflates to a different size",
            count, width, height, expected
        )));
    }

    raw.chunks_exact(sprite_size)
        .zip(1u32..)
        .map(|(pixels, id)| Sprite::new(id, width, height, pixels))
        .collect()
}

/// Encode sprites into a sheet and write it in one piece.
///
/// Nothing reaches `writer` unless the whole sheet encodes.
pub fn write_sheet<W: Write>(sprites: &[Sprite], mut writer: W) -> Result<()> {
    let bytes = encode_sheet(sprites)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Encode sprites into an in-memory sheet.
pub fn encode_sheet(sprites: &[Sprite]) -> Result<Vec<u8>> {
    let first = sprites.first().ok_or(AssetError::EmptyInput)?;
    let (width, height) = (first.width(), first.height());

    if let Some((index, odd)) = sprites
        .iter()
        .enumerate()
        .find(|(_, s)| s.width() != width || s.height() != height)
    {
        return Err(AssetError::DimensionMismatch {
            index,
            width,
            height,
            found_width: odd.width(),
            found_height: odd.height(),
        });
    }

    let header_width = header_field(width as usize, "width")?;
    let header_height = header_field(height as usize, "height")?;
    let header_count = header_field(sprites.len(), "sprite count")?;

    let mut raw = Vec::with_capacity(sprites.iter().map(|s| s.rgba().len()).sum());
    for sprite in sprites {
        raw.extend_from_slice(sprite.rgba());
    }

    let payload = compress(&raw)?;
    let payload_len = header_field(payload.len(), "payload length")?;

    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.write_u32::<LE>(SHEET_MAGIC)?;
    out.write_i32::<LE>(header_width)?;
    out.write_i32::<LE>(header_height)?;
    out.write_i32::<LE>(header_count)?;
    out.write_i32::<LE>(payload_len)?;
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Read a sheet file from disk.
pub fn read_sheet_file(path: &Path) -> Result<Vec<Sprite>> {
    let bytes = fs::read(path).map_err(|e| AssetError::io_at(path, "Failed to read sheet", e))?;
    read_sheet(bytes.as_slice())
}

/// Write a sheet file to disk.
pub fn write_sheet_file(path: &Path, sprites: &[Sprite]) -> Result<()> {
    let bytes = encode_sheet(sprites)?;
    fs::write(path, bytes).map_err(|e| AssetError::io_at(path, "Failed to write sheet", e))
}

fn header_field(value: usize, field: &str) -> Result<i32> {
    i32::try_from(value).map_err(|_| {
        AssetError::precondition(format!("sheet {} {} does not fit the header", field, value))
    })
}

fn truncated(field: &'static str) -> impl FnOnce(io::Error) -> AssetError {
    move |e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            AssetError::corrupt(format!("header truncated before {}", field))
        } else {
            AssetError::IoError(e)
        }
    }
}
