//! mediaPrism core: media envelope decoding and image representation selection.
//!
//! This crate turns opaque media blobs (optionally gzip-packed TL objects) into
//! typed [`media::Media`] descriptors. It carries no I/O or runtime
//! dependencies; every entry point is a pure function over caller-owned bytes.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `MediaError`/`Result`, and the public
//! [`decode_media_envelope`] collapses them to `None`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod decoder;
pub mod error;
pub mod media;
pub mod protocol;

pub use decoder::{decode_media_envelope, try_decode_media_envelope, DecoderLimits};
/// Shared result type.
pub use error::{ErrorCode, MediaError, Result};
pub use media::Media;
