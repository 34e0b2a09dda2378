//! TL stream edge cases: malformed primitives, trailing data, rarer constructors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use mediaprism_core::media::{FileAttribute, Media, MediaResource, StickerPackReference};
use mediaprism_core::protocol::reader::VECTOR;
use mediaprism_core::protocol::schema;
use mediaprism_core::{decode_media_envelope, try_decode_media_envelope, DecoderLimits};

use tl_builder::*;

fn code(raw: &[u8]) -> &'static str {
    try_decode_media_envelope(raw, &DecoderLimits::unbounded())
        .expect_err("expected error")
        .code()
        .as_str()
}

/// photo header up to (not including) the sizes vector
fn photo_head(file_reference: Tl) -> Tl {
    Tl::new()
        .id(schema::PHOTO)
        .int(0)
        .long(1)
        .long(2)
        .raw(&file_reference.build())
        .int(1_560_000_000)
}

#[test]
fn oversized_valid_photo_decodes_without_limits() {
    let file_reference = vec![0x42; 0x00ff_ffff];
    let tl = photo(8, &file_reference, &[photo_size("s", 90, 90)]);
    assert!(tl.len() > 16 * 1024 * 1024);

    let Some(Media::Image(image)) = decode_media_envelope(&tl) else {
        panic!("expected image");
    };
    assert_eq!(image.reference.file_reference.len(), 0x00ff_ffff);

    let capped = try_decode_media_envelope(&tl, &DecoderLimits::default())
        .expect_err("default limits cap the envelope");
    assert_eq!(capped.code().as_str(), "PAYLOAD_TOO_LARGE");
}

#[test]
fn negative_vector_count_is_malformed() {
    let tl = photo_head(Tl::new().bytes(b""))
        .id(VECTOR)
        .int(-1)
        .int(2)
        .build();
    assert_eq!(code(&tl), "MALFORMED_STREAM");
    assert!(decode_media_envelope(&tl).is_none());
}

#[test]
fn invalid_utf8_string_is_malformed() {
    let name = Tl::new()
        .id(schema::DOCUMENT_ATTRIBUTE_FILENAME)
        .bytes(&[0xc3, 0x28])
        .build();
    let tl = document(3, "text/plain", None, &[name]);
    assert_eq!(code(&tl), "MALFORMED_STREAM");
}

#[test]
fn reserved_length_byte_is_malformed() {
    let tl = photo_head(Tl::new().raw(&[255, 0, 0, 0]))
        .vector(&[])
        .int(2)
        .build();
    assert_eq!(code(&tl), "MALFORMED_STREAM");
}

#[test]
fn missing_bytes_padding_is_malformed() {
    // two payload bytes after a one-byte length need one byte of padding
    let tl = Tl::new()
        .id(schema::PHOTO_STRIPPED_SIZE)
        .string("i")
        .raw(&[2, 7, 7])
        .build();
    assert_eq!(code(&tl), "MALFORMED_STREAM");
}

#[test]
fn trailing_bytes_are_ignored() {
    let tl = photo(4, b"r", &[photo_size("m", 320, 240)]);
    let mut padded = tl.clone();
    padded.extend_from_slice(&[1, 2, 3, 4, 5]);

    let expected = decode_media_envelope(&tl);
    assert!(expected.is_some());
    assert_eq!(decode_media_envelope(&padded), expected);
}

#[test]
fn cached_size_becomes_a_representation() {
    let cached = Tl::new()
        .id(schema::PHOTO_CACHED_SIZE)
        .string("c")
        .raw(&file_location(9, 4).build())
        .int(40)
        .int(30)
        .bytes(&[1, 2, 3])
        .build();
    let tl = photo(6, b"ref", &[cached]);

    let Some(Media::Image(image)) = decode_media_envelope(&tl) else {
        panic!("expected image");
    };
    assert_eq!(image.representations.len(), 1);
    let rep = &image.representations[0];
    assert_eq!((rep.dimensions.width, rep.dimensions.height), (40, 30));
    assert_eq!(
        rep.resource,
        MediaResource::CloudPhotoSize {
            datacenter_id: 2,
            photo_id: 6,
            access_hash: -1,
            size_spec: "c".into(),
            volume_id: 9,
            local_id: 4,
            file_reference: b"ref".to_vec(),
        }
    );
    assert!(image.immediate_thumbnail_data.is_none());
}

#[test]
fn flag_attributes_and_sticker_set_id() {
    let animated = Tl::new().id(schema::DOCUMENT_ATTRIBUTE_ANIMATED).build();
    let has_stickers = Tl::new().id(schema::DOCUMENT_ATTRIBUTE_HAS_STICKERS).build();
    let sticker = Tl::new()
        .id(schema::DOCUMENT_ATTRIBUTE_STICKER)
        .int(0)
        .string("x")
        .id(schema::INPUT_STICKER_SET_ID)
        .long(5)
        .long(6)
        .build();
    let tl = document(10, "video/mp4", None, &[animated, has_stickers, sticker]);

    let Some(Media::File(file)) = decode_media_envelope(&tl) else {
        panic!("expected file");
    };
    assert_eq!(
        file.attributes,
        vec![
            FileAttribute::Animated,
            FileAttribute::HasLinkedStickers,
            FileAttribute::Sticker {
                display_text: "x".into(),
                pack_reference: Some(StickerPackReference::Id {
                    id: 5,
                    access_hash: 6,
                }),
                mask_data: None,
            },
        ]
    );
    assert_eq!(file.file_name(), None);
}
