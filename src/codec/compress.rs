//! Compression boundary for sheet payloads (zlib via flate2).

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::{AssetError, Result};

/// Compress a buffer in one shot.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Decompress a buffer in one shot.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    ZlibDecoder::new(data)
        .read_to_end(&mut out)
        .map_err(|e| AssetError::corrupt(format!("failed to decompress payload: {}", e)))?;
    Ok(out)
}

/// Decompress at most `limit + 1` bytes.
///
/// Enough to tell whether the payload matches an expected size without
/// inflating an arbitrarily large stream.
pub fn decompress_capped(data: &[u8], limit: usize) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    ZlibDecoder::new(data)
        .take(limit as u64 + 1)
        .read_to_end(&mut out)
        .map_err(|e| AssetError::corrupt(format!("failed to decompress payload: {}", e)))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_shrinks_repetitive_data() {
        let data = vec![7u8; 4096];
        let packed = compress(&data).unwrap();
        assert!(packed.len() < data.len());
        assert_eq!(decompress(&packed).unwrap(), data);
    }

    #[test]
    fn test_decompress_rejects_garbage() {
        let err = decompress(b"definitely not zlib").unwrap_err();
        assert!(matches!(err, AssetError::CorruptPayload { .. }));
    }

    #[test]
    fn test_decompress_capped_stops_early() {
        let packed = compress(&vec![1u8; 1000]).unwrap();
        let out = decompress_capped(&packed, 10).unwrap();
        assert_eq!(out.len(), 11);
    }

    #[test]
    fn test_empty_buffer() {
        let packed = compress(&[]).unwrap();
        assert!(decompress(&packed).unwrap().is_empty());
    }
}
