//! Envelope signature detection and unpacking.
//!
//! Layout:
//! - bytes 0..4: LE `i32` signature
//! - signature == `gzip_packed`: remainder is a `bytes` field holding a
//!   compressed TL stream
//! - otherwise the whole buffer, signature included, is the TL stream

use std::borrow::Cow;

use bytes::Buf;

use crate::error::{MediaError, Result};
use crate::protocol::{gzip, reader::WireReader};

/// `gzip_packed#3072cfa1 packed_data:bytes`.
pub const GZIP_PACKED: i32 = 0x3072cfa1;

/// Return the TL stream carried by `envelope`, inflating it when packed.
pub fn unpack(envelope: &[u8], max_inflated_bytes: usize) -> Result<Cow<'_, [u8]>> {
    let mut head = envelope;
    if head.remaining() < 4 {
        return Err(MediaError::TruncatedSignature(envelope.len()));
    }
    let signature = head.get_i32_le();

    if signature != GZIP_PACKED {
        tracing::trace!(signature, "plain envelope");
        return Ok(Cow::Borrowed(envelope));
    }

    let packed = WireReader::new(head)
        .read_bytes()
        .map_err(|e| MediaError::MalformedLengthPrefix(e.to_string()))?;
    let inflated = gzip::inflate(&packed, max_inflated_bytes)?;
    tracing::trace!(
        packed_len = packed.len(),
        inflated_len = inflated.len(),
        "gzip_packed envelope"
    );
    Ok(Cow::Owned(inflated))
}
