//! Media envelope decoder.
//!
//! envelope → signature check → (inflate) → TL deserialize → constructor
//! dispatch → [`Media`]. Each stage short-circuits with `?`; the public
//! [`decode_media_envelope`] folds every failure into `None`.

use crate::error::{MediaError, Result};
use crate::media::{file_from_api_document, image_from_api_photo, Media};
use crate::protocol::envelope;
use crate::protocol::reader::WireReader;
use crate::protocol::schema::{self, ApiDocument, ApiPhoto, WireObject};

/// Size limits applied by [`try_decode_media_envelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderLimits {
    /// Largest accepted envelope.
    pub max_envelope_bytes: usize,
    /// Largest accepted inflated `gzip_packed` payload.
    pub max_inflated_bytes: usize,
}

pub const DEFAULT_MAX_ENVELOPE_BYTES: usize = 16 * 1024 * 1024;
pub const DEFAULT_MAX_INFLATED_BYTES: usize = 32 * 1024 * 1024;

impl Default for DecoderLimits {
    fn default() -> Self {
        Self {
            max_envelope_bytes: DEFAULT_MAX_ENVELOPE_BYTES,
            max_inflated_bytes: DEFAULT_MAX_INFLATED_BYTES,
        }
    }
}

impl DecoderLimits {
    /// No caps beyond what the wire format itself can express.
    pub const fn unbounded() -> Self {
        Self {
            max_envelope_bytes: usize::MAX,
            max_inflated_bytes: usize::MAX,
        }
    }
}

/// Decode `bytes` into a media descriptor, or `None` if it is not one.
///
/// Any input length is accepted; use [`try_decode_media_envelope`] to cap it.
pub fn decode_media_envelope(bytes: &[u8]) -> Option<Media> {
    match try_decode_media_envelope(bytes, &DecoderLimits::unbounded()) {
        Ok(media) => Some(media),
        Err(e) => {
            tracing::debug!(code = e.code().as_str(), error = %e, len = bytes.len(), "media envelope rejected");
            None
        }
    }
}

/// Decode `bytes`, reporting why decoding failed.
pub fn try_decode_media_envelope(bytes: &[u8], limits: &DecoderLimits) -> Result<Media> {
    if bytes.len() > limits.max_envelope_bytes {
        return Err(MediaError::PayloadTooLarge {
            len: bytes.len(),
            limit: limits.max_envelope_bytes,
        });
    }

    let stream = envelope::unpack(bytes, limits.max_inflated_bytes)?;
    let object = schema::parse_object(&mut WireReader::new(&stream))?;

    match object {
        WireObject::Photo(photo) => image_from_api_photo(&photo)
            .map(Media::Image)
            .ok_or_else(|| MediaError::UnhandledSchema(photo_constructor(&photo))),
        WireObject::Document(document) => file_from_api_document(&document)
            .map(Media::File)
            .ok_or_else(|| MediaError::UnhandledSchema(document_constructor(&document))),
        WireObject::Other(id) => Err(MediaError::UnhandledSchema(id)),
    }
}

fn photo_constructor(photo: &ApiPhoto) -> u32 {
    match photo {
        ApiPhoto::Empty { .. } => schema::PHOTO_EMPTY,
        ApiPhoto::Photo { .. } => schema::PHOTO,
    }
}

fn document_constructor(document: &ApiDocument) -> u32 {
    match document {
        ApiDocument::Empty { .. } => schema::DOCUMENT_EMPTY,
        ApiDocument::Document { .. } => schema::DOCUMENT,
    }
}
