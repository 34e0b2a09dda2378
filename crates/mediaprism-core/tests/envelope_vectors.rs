//! Envelope vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use mediaprism_core::media::{FileAttribute, Media};
use mediaprism_core::{decode_media_envelope, try_decode_media_envelope, DecoderLimits};

use vector_loader::load;

fn dims(reps: &[mediaprism_core::media::ImageRepresentation]) -> Vec<(u64, u64)> {
    reps.iter()
        .map(|r| (r.dimensions.width as u64, r.dimensions.height as u64))
        .collect()
}

fn expected_dims(ex: &serde_json::Value) -> Vec<(u64, u64)> {
    ex["representations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| (p[0].as_u64().unwrap(), p[1].as_u64().unwrap()))
        .collect()
}

#[test]
fn envelope_vectors() {
    let files = [
        "envelope_empty.json",
        "envelope_too_short.json",
        "envelope_zero_signature.json",
        "photo_plain.json",
        "document_plain.json",
        "photo_truncated.json",
        "photo_empty.json",
        "photo_size_top_level.json",
        "packed_bad_prefix.json",
        "packed_truncated_prefix.json",
        "packed_not_compressed.json",
    ];

    for f in files {
        let v = load(f);
        let raw = v.frame.decode();
        let res = try_decode_media_envelope(&raw, &DecoderLimits::default());

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            assert!(decode_media_envelope(&raw).is_none(), "vector={}", v.description);
            continue;
        }

        let media = res.expect("expected media");
        let ex = v.expect.expect("missing expect block");
        assert_eq!(decode_media_envelope(&raw).as_ref(), Some(&media), "vector={}", v.description);

        match (ex["kind"].as_str().unwrap(), media) {
            ("image", Media::Image(image)) => {
                assert_eq!(image.image_id.id as u64, ex["id"].as_u64().unwrap(), "vector={}", v.description);
                assert_eq!(dims(&image.representations), expected_dims(&ex), "vector={}", v.description);
                assert_eq!(
                    image.immediate_thumbnail_data.map(|d| d.len() as u64),
                    ex["thumbnail_len"].as_u64(),
                    "vector={}",
                    v.description
                );
                assert_eq!(image.flags.has_stickers, ex["has_stickers"].as_bool().unwrap(), "vector={}", v.description);
            }
            ("file", Media::File(file)) => {
                assert_eq!(file.file_id.id as u64, ex["id"].as_u64().unwrap(), "vector={}", v.description);
                assert_eq!(dims(&file.preview_representations), expected_dims(&ex), "vector={}", v.description);
                assert_eq!(file.mime_type, ex["mime_type"].as_str().unwrap(), "vector={}", v.description);
                assert_eq!(file.size as u64, ex["size"].as_u64().unwrap(), "vector={}", v.description);
                assert_eq!(file.file_name(), ex["file_name"].as_str(), "vector={}", v.description);
                assert_eq!(file.attributes.len() as u64, ex["attributes"].as_u64().unwrap(), "vector={}", v.description);
            }
            (kind, other) => panic!("vector={} expected {kind}, got {other:?}", v.description),
        }
    }
}

#[test]
fn plain_photo_fields() {
    let raw = load("photo_plain.json").frame.decode();
    let Some(Media::Image(image)) = decode_media_envelope(&raw) else {
        panic!("expected image");
    };

    assert_eq!(image.reference.access_hash, -77);
    assert_eq!(image.reference.file_reference, vec![1, 2, 3]);
    assert_eq!(image.immediate_thumbnail_data, Some(vec![0x01, 0x28, 0x1c, 0xaa]));

    let resource = &image.representations[1].resource;
    assert_eq!(
        *resource,
        mediaprism_core::media::MediaResource::CloudPhotoSize {
            datacenter_id: 2,
            photo_id: 5_000_000_001,
            access_hash: -77,
            size_spec: "x".into(),
            volume_id: 2222,
            local_id: 2,
            file_reference: vec![1, 2, 3],
        }
    );
}

#[test]
fn plain_document_attributes() {
    let raw = load("document_plain.json").frame.decode();
    let Some(Media::File(file)) = decode_media_envelope(&raw) else {
        panic!("expected file");
    };

    match &file.attributes[0] {
        FileAttribute::Video {
            duration,
            dimensions,
            flags,
        } => {
            assert_eq!(*duration, 31);
            assert_eq!((dimensions.width, dimensions.height), (640, 360));
            assert!(!flags.instant_round_video);
            assert!(flags.supports_streaming);
        }
        other => panic!("unexpected attribute {other:?}"),
    }

    match &file.resource {
        mediaprism_core::media::MediaResource::CloudDocument {
            datacenter_id,
            file_name,
            size,
            ..
        } => {
            assert_eq!(*datacenter_id, 4);
            assert_eq!(file_name.as_deref(), Some("clip.mp4"));
            assert_eq!(*size, 1_048_576);
        }
        other => panic!("unexpected resource {other:?}"),
    }
}

#[test]
fn short_buffers_never_decode() {
    for len in 0..4 {
        let raw = vec![0xa1u8; len];
        assert!(decode_media_envelope(&raw).is_none(), "len={len}");
    }
}
