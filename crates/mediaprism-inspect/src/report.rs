//! Per-file decode report.

use serde::Serialize;
use serde_json::json;

use mediaprism_core::media::{largest_image_representation, ImageRepresentation, Media};
use mediaprism_core::{try_decode_media_envelope, DecoderLimits};

use crate::config::OutputFormat;

/// Outcome of decoding one file.
#[derive(Debug, Serialize)]
pub struct Report {
    pub file: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

pub fn inspect_bytes(file: &str, bytes: &[u8], limits: &DecoderLimits) -> Report {
    match try_decode_media_envelope(bytes, limits) {
        Ok(media) => Report {
            file: file.to_owned(),
            ok: true,
            media: Some(media),
            error: None,
        },
        Err(e) => {
            tracing::debug!(file, error = %e, "decode failed");
            Report {
                file: file.to_owned(),
                ok: false,
                media: None,
                error: Some(e.code().as_str()),
            }
        }
    }
}

/// Failure report for a file that could not be read.
pub fn unreadable(file: &str) -> Report {
    Report {
        file: file.to_owned(),
        ok: false,
        media: None,
        error: Some(mediaprism_core::ErrorCode::Io.as_str()),
    }
}

pub fn render(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(report).unwrap_or_else(|e| {
            json!({ "file": report.file, "ok": false, "error": e.to_string() }).to_string()
        }),
        OutputFormat::Summary => summary(report),
    }
}

fn largest(reps: &[ImageRepresentation]) -> String {
    largest_image_representation(reps)
        .map(|r| format!("{}x{}", r.dimensions.width, r.dimensions.height))
        .unwrap_or_else(|| "-".into())
}

fn summary(report: &Report) -> String {
    match (&report.media, report.error) {
        (Some(Media::Image(image)), _) => format!(
            "{}: image id={} representations={} largest={}",
            report.file,
            image.image_id.id,
            image.representations.len(),
            largest(&image.representations)
        ),
        (Some(Media::File(file)), _) => format!(
            "{}: file id={} mime={} size={} name={} previews={}",
            report.file,
            file.file_id.id,
            file.mime_type,
            file.size,
            file.file_name().unwrap_or("-"),
            file.preview_representations.len()
        ),
        (None, code) => format!("{}: error {}", report.file, code.unwrap_or("UNKNOWN")),
    }
}
