//! Typed media descriptors produced by the envelope decoder.

pub mod convert;
pub mod representation;

use serde::Serialize;

pub use convert::{file_from_api_document, image_from_api_photo};
pub use representation::{
    image_representation_larger_than, largest_image_representation,
    smallest_image_representation,
};

/// Decoded media (closed union).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Media {
    Image(MediaImage),
    File(MediaFile),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaNamespace {
    CloudImage,
    CloudFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MediaId {
    pub namespace: MediaNamespace,
    pub id: i64,
}

/// Pixel size of a representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelDimensions {
    pub width: i32,
    pub height: i32,
}

impl PixelDimensions {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Where the bytes of a representation live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaResource {
    CloudPhotoSize {
        datacenter_id: i32,
        photo_id: i64,
        access_hash: i64,
        size_spec: String,
        volume_id: i64,
        local_id: i32,
        file_reference: Vec<u8>,
    },
    CloudDocumentSize {
        datacenter_id: i32,
        document_id: i64,
        access_hash: i64,
        size_spec: String,
        volume_id: i64,
        local_id: i32,
        file_reference: Vec<u8>,
    },
    CloudDocument {
        datacenter_id: i32,
        file_id: i64,
        access_hash: i64,
        size: i32,
        file_reference: Vec<u8>,
        file_name: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRepresentation {
    pub dimensions: PixelDimensions,
    pub resource: MediaResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageReference {
    pub image_id: i64,
    pub access_hash: i64,
    pub file_reference: Vec<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImageFlags {
    pub has_stickers: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaImage {
    pub image_id: MediaId,
    pub representations: Vec<ImageRepresentation>,
    pub immediate_thumbnail_data: Option<Vec<u8>>,
    pub reference: ImageReference,
    pub flags: ImageFlags,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaFile {
    pub file_id: MediaId,
    pub resource: MediaResource,
    pub preview_representations: Vec<ImageRepresentation>,
    pub immediate_thumbnail_data: Option<Vec<u8>>,
    pub mime_type: String,
    pub size: i32,
    pub attributes: Vec<FileAttribute>,
}

impl MediaFile {
    /// First `FileName` attribute, if any.
    pub fn file_name(&self) -> Option<&str> {
        file_name_from_attributes(&self.attributes)
    }
}

pub(crate) fn file_name_from_attributes(attributes: &[FileAttribute]) -> Option<&str> {
    attributes.iter().find_map(|a| match a {
        FileAttribute::FileName(name) => Some(name.as_str()),
        _ => None,
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VideoFlags {
    pub instant_round_video: bool,
    pub supports_streaming: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StickerPackReference {
    Id { id: i64, access_hash: i64 },
    Name(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StickerMaskCoords {
    pub n: i32,
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAttribute {
    ImageSize(PixelDimensions),
    Animated,
    Sticker {
        display_text: String,
        pack_reference: Option<StickerPackReference>,
        mask_data: Option<StickerMaskCoords>,
    },
    Video {
        duration: i32,
        dimensions: PixelDimensions,
        flags: VideoFlags,
    },
    Audio {
        is_voice: bool,
        duration: i32,
        title: Option<String>,
        performer: Option<String>,
        waveform: Option<Vec<u8>>,
    },
    FileName(String),
    HasLinkedStickers,
}
