//! Inflate for `gzip_packed` payloads.
//!
//! Accepts gzip framing and falls back to zlib framing when the gzip magic is
//! absent. Output is capped at `limit` bytes.

use std::io::Read;

use flate2::read::{GzDecoder, ZlibDecoder};

use crate::error::{MediaError, Result};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decompress `packed`, failing if the output would exceed `limit`.
pub fn inflate(packed: &[u8], limit: usize) -> Result<Vec<u8>> {
    if packed.starts_with(&GZIP_MAGIC) {
        read_capped(GzDecoder::new(packed), limit)
    } else {
        read_capped(ZlibDecoder::new(packed), limit)
    }
}

fn read_capped(decoder: impl Read, limit: usize) -> Result<Vec<u8>> {
    // one byte over the limit tells "exactly at limit" apart from "too large"
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    let mut out = Vec::new();
    decoder
        .take(cap)
        .read_to_end(&mut out)
        .map_err(|e| MediaError::DecompressionFailure(e.to_string()))?;

    if out.len() > limit {
        return Err(MediaError::PayloadTooLarge {
            len: out.len(),
            limit,
        });
    }
    Ok(out)
}
