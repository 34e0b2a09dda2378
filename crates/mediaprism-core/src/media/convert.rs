//! Wire object → media descriptor mapping.
//!
//! `photoEmpty` and `documentEmpty` carry nothing displayable and map to
//! `None`.

use crate::media::{
    file_name_from_attributes, FileAttribute, ImageFlags, ImageReference, ImageRepresentation,
    MediaFile, MediaId, MediaImage, MediaNamespace, MediaResource, PixelDimensions,
    StickerMaskCoords, StickerPackReference, VideoFlags,
};
use crate::protocol::schema::{
    ApiDocument, ApiDocumentAttribute, ApiFileLocation, ApiInputStickerSet, ApiPhoto,
    ApiPhotoSize,
};

const PHOTO_FLAG_HAS_STICKERS: i32 = 1 << 0;
const VIDEO_FLAG_ROUND_MESSAGE: i32 = 1 << 0;
const VIDEO_FLAG_SUPPORTS_STREAMING: i32 = 1 << 1;
const AUDIO_FLAG_VOICE: i32 = 1 << 10;

/// Owner of a size list, deciding which resource variant a size maps to.
enum SizeOwner<'a> {
    Photo {
        datacenter_id: i32,
        photo_id: i64,
        access_hash: i64,
        file_reference: &'a [u8],
    },
    Document {
        datacenter_id: i32,
        document_id: i64,
        access_hash: i64,
        file_reference: &'a [u8],
    },
}

impl SizeOwner<'_> {
    fn resource(&self, size_spec: &str, location: ApiFileLocation) -> MediaResource {
        match *self {
            SizeOwner::Photo {
                datacenter_id,
                photo_id,
                access_hash,
                file_reference,
            } => MediaResource::CloudPhotoSize {
                datacenter_id,
                photo_id,
                access_hash,
                size_spec: size_spec.to_owned(),
                volume_id: location.volume_id,
                local_id: location.local_id,
                file_reference: file_reference.to_vec(),
            },
            SizeOwner::Document {
                datacenter_id,
                document_id,
                access_hash,
                file_reference,
            } => MediaResource::CloudDocumentSize {
                datacenter_id,
                document_id,
                access_hash,
                size_spec: size_spec.to_owned(),
                volume_id: location.volume_id,
                local_id: location.local_id,
                file_reference: file_reference.to_vec(),
            },
        }
    }
}

/// Split sizes into displayable representations and an inline stripped thumbnail.
fn representations_from_sizes(
    owner: &SizeOwner<'_>,
    sizes: &[ApiPhotoSize],
) -> (Option<Vec<u8>>, Vec<ImageRepresentation>) {
    let mut immediate_thumbnail_data = None;
    let mut representations = Vec::new();

    for size in sizes {
        match size {
            ApiPhotoSize::Size {
                size_type,
                location,
                w,
                h,
                ..
            }
            | ApiPhotoSize::Cached {
                size_type,
                location,
                w,
                h,
                ..
            } => representations.push(ImageRepresentation {
                dimensions: PixelDimensions::new(*w, *h),
                resource: owner.resource(size_type, *location),
            }),
            ApiPhotoSize::Stripped { bytes, .. } => {
                immediate_thumbnail_data = Some(bytes.clone());
            }
            ApiPhotoSize::Empty { .. } => {}
        }
    }

    (immediate_thumbnail_data, representations)
}

pub fn image_from_api_photo(photo: &ApiPhoto) -> Option<MediaImage> {
    match photo {
        ApiPhoto::Photo {
            flags,
            id,
            access_hash,
            file_reference,
            sizes,
            dc_id,
            ..
        } => {
            let owner = SizeOwner::Photo {
                datacenter_id: *dc_id,
                photo_id: *id,
                access_hash: *access_hash,
                file_reference,
            };
            let (immediate_thumbnail_data, representations) =
                representations_from_sizes(&owner, sizes);

            Some(MediaImage {
                image_id: MediaId {
                    namespace: MediaNamespace::CloudImage,
                    id: *id,
                },
                representations,
                immediate_thumbnail_data,
                reference: ImageReference {
                    image_id: *id,
                    access_hash: *access_hash,
                    file_reference: file_reference.clone(),
                },
                flags: ImageFlags {
                    has_stickers: flags & PHOTO_FLAG_HAS_STICKERS != 0,
                },
            })
        }
        ApiPhoto::Empty { .. } => None,
    }
}

pub fn file_from_api_document(document: &ApiDocument) -> Option<MediaFile> {
    match document {
        ApiDocument::Document {
            id,
            access_hash,
            file_reference,
            mime_type,
            size,
            thumbs,
            dc_id,
            attributes,
            ..
        } => {
            let attributes: Vec<FileAttribute> = attributes.iter().map(file_attribute).collect();
            let owner = SizeOwner::Document {
                datacenter_id: *dc_id,
                document_id: *id,
                access_hash: *access_hash,
                file_reference,
            };
            let (immediate_thumbnail_data, preview_representations) =
                representations_from_sizes(&owner, thumbs.as_deref().unwrap_or_default());

            let resource = MediaResource::CloudDocument {
                datacenter_id: *dc_id,
                file_id: *id,
                access_hash: *access_hash,
                size: *size,
                file_reference: file_reference.clone(),
                file_name: file_name_from_attributes(&attributes).map(str::to_owned),
            };

            Some(MediaFile {
                file_id: MediaId {
                    namespace: MediaNamespace::CloudFile,
                    id: *id,
                },
                resource,
                preview_representations,
                immediate_thumbnail_data,
                mime_type: mime_type.clone(),
                size: *size,
                attributes,
            })
        }
        ApiDocument::Empty { .. } => None,
    }
}

fn file_attribute(attribute: &ApiDocumentAttribute) -> FileAttribute {
    match attribute {
        ApiDocumentAttribute::ImageSize { w, h } => {
            FileAttribute::ImageSize(PixelDimensions::new(*w, *h))
        }
        ApiDocumentAttribute::Animated => FileAttribute::Animated,
        ApiDocumentAttribute::Sticker {
            alt,
            stickerset,
            mask_coords,
            ..
        } => FileAttribute::Sticker {
            display_text: alt.clone(),
            pack_reference: sticker_pack_reference(stickerset),
            mask_data: mask_coords.map(|m| StickerMaskCoords {
                n: m.n,
                x: m.x,
                y: m.y,
                zoom: m.zoom,
            }),
        },
        ApiDocumentAttribute::Video {
            flags,
            duration,
            w,
            h,
        } => FileAttribute::Video {
            duration: *duration,
            dimensions: PixelDimensions::new(*w, *h),
            flags: VideoFlags {
                instant_round_video: flags & VIDEO_FLAG_ROUND_MESSAGE != 0,
                supports_streaming: flags & VIDEO_FLAG_SUPPORTS_STREAMING != 0,
            },
        },
        ApiDocumentAttribute::Audio {
            flags,
            duration,
            title,
            performer,
            waveform,
        } => FileAttribute::Audio {
            is_voice: flags & AUDIO_FLAG_VOICE != 0,
            duration: *duration,
            title: title.clone(),
            performer: performer.clone(),
            waveform: waveform.clone(),
        },
        ApiDocumentAttribute::Filename { file_name } => FileAttribute::FileName(file_name.clone()),
        ApiDocumentAttribute::HasStickers => FileAttribute::HasLinkedStickers,
    }
}

fn sticker_pack_reference(set: &ApiInputStickerSet) -> Option<StickerPackReference> {
    match set {
        ApiInputStickerSet::Empty => None,
        ApiInputStickerSet::Id { id, access_hash } => Some(StickerPackReference::Id {
            id: *id,
            access_hash: *access_hash,
        }),
        ApiInputStickerSet::ShortName { short_name } => {
            Some(StickerPackReference::Name(short_name.clone()))
        }
    }
}
