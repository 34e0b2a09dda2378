//! TL schemas for photos and documents.
//!
//! Every boxed object opens with its constructor id. Unknown ids at any depth
//! fail with `UnrecognizedSchema`; a top-level object outside the photo and
//! document families is parsed in full and reported as [`WireObject::Other`].

use crate::error::{MediaError, Result};
use crate::protocol::reader::WireReader;

pub const PHOTO_EMPTY: u32 = 0x2331b22d;
pub const PHOTO: u32 = 0xd07504a5;

pub const PHOTO_SIZE_EMPTY: u32 = 0x0e17e23c;
pub const PHOTO_SIZE: u32 = 0x77bfb61b;
pub const PHOTO_CACHED_SIZE: u32 = 0xe9a734fa;
pub const PHOTO_STRIPPED_SIZE: u32 = 0xe0b0bc2e;

pub const FILE_LOCATION_TO_BE_DEPRECATED: u32 = 0xbc7fc6cd;

pub const DOCUMENT_EMPTY: u32 = 0x36f8c871;
pub const DOCUMENT: u32 = 0x9ba29cc1;

pub const DOCUMENT_ATTRIBUTE_IMAGE_SIZE: u32 = 0x6c37c15c;
pub const DOCUMENT_ATTRIBUTE_ANIMATED: u32 = 0x11b58939;
pub const DOCUMENT_ATTRIBUTE_STICKER: u32 = 0x6319d612;
pub const DOCUMENT_ATTRIBUTE_VIDEO: u32 = 0x0ef02ce6;
pub const DOCUMENT_ATTRIBUTE_AUDIO: u32 = 0x9852f9c6;
pub const DOCUMENT_ATTRIBUTE_FILENAME: u32 = 0x15590068;
pub const DOCUMENT_ATTRIBUTE_HAS_STICKERS: u32 = 0x9801d2f7;

pub const INPUT_STICKER_SET_EMPTY: u32 = 0xffb62b95;
pub const INPUT_STICKER_SET_ID: u32 = 0x9de7a269;
pub const INPUT_STICKER_SET_SHORT_NAME: u32 = 0x861cc8a0;

pub const MASK_COORDS: u32 = 0xaed6dbb2;

/// Result of the generic deserializer.
#[derive(Debug, Clone, PartialEq)]
pub enum WireObject {
    Photo(ApiPhoto),
    Document(ApiDocument),
    /// Recognised constructor that is neither a photo nor a document.
    Other(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiPhoto {
    Empty {
        id: i64,
    },
    Photo {
        flags: i32,
        id: i64,
        access_hash: i64,
        file_reference: Vec<u8>,
        date: i32,
        sizes: Vec<ApiPhotoSize>,
        dc_id: i32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiPhotoSize {
    Empty {
        size_type: String,
    },
    Size {
        size_type: String,
        location: ApiFileLocation,
        w: i32,
        h: i32,
        size: i32,
    },
    Cached {
        size_type: String,
        location: ApiFileLocation,
        w: i32,
        h: i32,
        bytes: Vec<u8>,
    },
    Stripped {
        size_type: String,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiFileLocation {
    pub volume_id: i64,
    pub local_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiDocument {
    Empty {
        id: i64,
    },
    Document {
        flags: i32,
        id: i64,
        access_hash: i64,
        file_reference: Vec<u8>,
        date: i32,
        mime_type: String,
        size: i32,
        thumbs: Option<Vec<ApiPhotoSize>>,
        dc_id: i32,
        attributes: Vec<ApiDocumentAttribute>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiDocumentAttribute {
    ImageSize {
        w: i32,
        h: i32,
    },
    Animated,
    Sticker {
        flags: i32,
        alt: String,
        stickerset: ApiInputStickerSet,
        mask_coords: Option<ApiMaskCoords>,
    },
    Video {
        flags: i32,
        duration: i32,
        w: i32,
        h: i32,
    },
    Audio {
        flags: i32,
        duration: i32,
        title: Option<String>,
        performer: Option<String>,
        waveform: Option<Vec<u8>>,
    },
    Filename {
        file_name: String,
    },
    HasStickers,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiInputStickerSet {
    Empty,
    Id { id: i64, access_hash: i64 },
    ShortName { short_name: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApiMaskCoords {
    pub n: i32,
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

fn flag(flags: i32, bit: u32) -> bool {
    flags & (1 << bit) != 0
}

/// Parse one top-level boxed object.
pub fn parse_object(r: &mut WireReader<'_>) -> Result<WireObject> {
    let id = r.read_constructor()?;
    match id {
        PHOTO_EMPTY | PHOTO => Ok(WireObject::Photo(photo_body(id, r)?)),
        DOCUMENT_EMPTY | DOCUMENT => Ok(WireObject::Document(document_body(id, r)?)),
        PHOTO_SIZE_EMPTY | PHOTO_SIZE | PHOTO_CACHED_SIZE | PHOTO_STRIPPED_SIZE => {
            photo_size_body(id, r)?;
            Ok(WireObject::Other(id))
        }
        FILE_LOCATION_TO_BE_DEPRECATED => {
            file_location_body(r)?;
            Ok(WireObject::Other(id))
        }
        DOCUMENT_ATTRIBUTE_IMAGE_SIZE
        | DOCUMENT_ATTRIBUTE_ANIMATED
        | DOCUMENT_ATTRIBUTE_STICKER
        | DOCUMENT_ATTRIBUTE_VIDEO
        | DOCUMENT_ATTRIBUTE_AUDIO
        | DOCUMENT_ATTRIBUTE_FILENAME
        | DOCUMENT_ATTRIBUTE_HAS_STICKERS => {
            document_attribute_body(id, r)?;
            Ok(WireObject::Other(id))
        }
        INPUT_STICKER_SET_EMPTY | INPUT_STICKER_SET_ID | INPUT_STICKER_SET_SHORT_NAME => {
            input_sticker_set_body(id, r)?;
            Ok(WireObject::Other(id))
        }
        MASK_COORDS => {
            mask_coords_body(r)?;
            Ok(WireObject::Other(id))
        }
        other => Err(MediaError::UnrecognizedSchema(other)),
    }
}

fn photo_body(id: u32, r: &mut WireReader<'_>) -> Result<ApiPhoto> {
    if id == PHOTO_EMPTY {
        return Ok(ApiPhoto::Empty { id: r.read_i64()? });
    }
    let flags = r.read_i32()?;
    let photo_id = r.read_i64()?;
    let access_hash = r.read_i64()?;
    let file_reference = r.read_bytes()?;
    let date = r.read_i32()?;
    let sizes = r.read_vector(photo_size)?;
    let dc_id = r.read_i32()?;
    Ok(ApiPhoto::Photo {
        flags,
        id: photo_id,
        access_hash,
        file_reference,
        date,
        sizes,
        dc_id,
    })
}

fn photo_size(r: &mut WireReader<'_>) -> Result<ApiPhotoSize> {
    let id = r.read_constructor()?;
    photo_size_body(id, r)
}

fn photo_size_body(id: u32, r: &mut WireReader<'_>) -> Result<ApiPhotoSize> {
    match id {
        PHOTO_SIZE_EMPTY => Ok(ApiPhotoSize::Empty {
            size_type: r.read_string()?,
        }),
        PHOTO_SIZE => Ok(ApiPhotoSize::Size {
            size_type: r.read_string()?,
            location: file_location(r)?,
            w: r.read_i32()?,
            h: r.read_i32()?,
            size: r.read_i32()?,
        }),
        PHOTO_CACHED_SIZE => Ok(ApiPhotoSize::Cached {
            size_type: r.read_string()?,
            location: file_location(r)?,
            w: r.read_i32()?,
            h: r.read_i32()?,
            bytes: r.read_bytes()?,
        }),
        PHOTO_STRIPPED_SIZE => Ok(ApiPhotoSize::Stripped {
            size_type: r.read_string()?,
            bytes: r.read_bytes()?,
        }),
        other => Err(MediaError::UnrecognizedSchema(other)),
    }
}

fn file_location(r: &mut WireReader<'_>) -> Result<ApiFileLocation> {
    match r.read_constructor()? {
        FILE_LOCATION_TO_BE_DEPRECATED => file_location_body(r),
        other => Err(MediaError::UnrecognizedSchema(other)),
    }
}

fn file_location_body(r: &mut WireReader<'_>) -> Result<ApiFileLocation> {
    Ok(ApiFileLocation {
        volume_id: r.read_i64()?,
        local_id: r.read_i32()?,
    })
}

fn document_body(id: u32, r: &mut WireReader<'_>) -> Result<ApiDocument> {
    if id == DOCUMENT_EMPTY {
        return Ok(ApiDocument::Empty { id: r.read_i64()? });
    }
    let flags = r.read_i32()?;
    let doc_id = r.read_i64()?;
    let access_hash = r.read_i64()?;
    let file_reference = r.read_bytes()?;
    let date = r.read_i32()?;
    let mime_type = r.read_string()?;
    let size = r.read_i32()?;
    let thumbs = if flag(flags, 0) {
        Some(r.read_vector(photo_size)?)
    } else {
        None
    };
    let dc_id = r.read_i32()?;
    let attributes = r.read_vector(document_attribute)?;
    Ok(ApiDocument::Document {
        flags,
        id: doc_id,
        access_hash,
        file_reference,
        date,
        mime_type,
        size,
        thumbs,
        dc_id,
        attributes,
    })
}

fn document_attribute(r: &mut WireReader<'_>) -> Result<ApiDocumentAttribute> {
    let id = r.read_constructor()?;
    document_attribute_body(id, r)
}

fn document_attribute_body(id: u32, r: &mut WireReader<'_>) -> Result<ApiDocumentAttribute> {
    match id {
        DOCUMENT_ATTRIBUTE_IMAGE_SIZE => Ok(ApiDocumentAttribute::ImageSize {
            w: r.read_i32()?,
            h: r.read_i32()?,
        }),
        DOCUMENT_ATTRIBUTE_ANIMATED => Ok(ApiDocumentAttribute::Animated),
        DOCUMENT_ATTRIBUTE_STICKER => {
            let flags = r.read_i32()?;
            let alt = r.read_string()?;
            let stickerset = input_sticker_set(r)?;
            let mask_coords = if flag(flags, 0) {
                Some(mask_coords(r)?)
            } else {
                None
            };
            Ok(ApiDocumentAttribute::Sticker {
                flags,
                alt,
                stickerset,
                mask_coords,
            })
        }
        DOCUMENT_ATTRIBUTE_VIDEO => Ok(ApiDocumentAttribute::Video {
            flags: r.read_i32()?,
            duration: r.read_i32()?,
            w: r.read_i32()?,
            h: r.read_i32()?,
        }),
        DOCUMENT_ATTRIBUTE_AUDIO => {
            let flags = r.read_i32()?;
            let duration = r.read_i32()?;
            let title = if flag(flags, 0) { Some(r.read_string()?) } else { None };
            let performer = if flag(flags, 1) { Some(r.read_string()?) } else { None };
            let waveform = if flag(flags, 2) { Some(r.read_bytes()?) } else { None };
            Ok(ApiDocumentAttribute::Audio {
                flags,
                duration,
                title,
                performer,
                waveform,
            })
        }
        DOCUMENT_ATTRIBUTE_FILENAME => Ok(ApiDocumentAttribute::Filename {
            file_name: r.read_string()?,
        }),
        DOCUMENT_ATTRIBUTE_HAS_STICKERS => Ok(ApiDocumentAttribute::HasStickers),
        other => Err(MediaError::UnrecognizedSchema(other)),
    }
}

fn input_sticker_set(r: &mut WireReader<'_>) -> Result<ApiInputStickerSet> {
    let id = r.read_constructor()?;
    input_sticker_set_body(id, r)
}

fn input_sticker_set_body(id: u32, r: &mut WireReader<'_>) -> Result<ApiInputStickerSet> {
    match id {
        INPUT_STICKER_SET_EMPTY => Ok(ApiInputStickerSet::Empty),
        INPUT_STICKER_SET_ID => Ok(ApiInputStickerSet::Id {
            id: r.read_i64()?,
            access_hash: r.read_i64()?,
        }),
        INPUT_STICKER_SET_SHORT_NAME => Ok(ApiInputStickerSet::ShortName {
            short_name: r.read_string()?,
        }),
        other => Err(MediaError::UnrecognizedSchema(other)),
    }
}

fn mask_coords(r: &mut WireReader<'_>) -> Result<ApiMaskCoords> {
    match r.read_constructor()? {
        MASK_COORDS => mask_coords_body(r),
        other => Err(MediaError::UnrecognizedSchema(other)),
    }
}

fn mask_coords_body(r: &mut WireReader<'_>) -> Result<ApiMaskCoords> {
    Ok(ApiMaskCoords {
        n: r.read_i32()?,
        x: r.read_f64()?,
        y: r.read_f64()?,
        zoom: r.read_f64()?,
    })
}
