//! Top-level facade crate for mediaPrism.
//!
//! Re-exports the core decoder and the inspect library so users can depend on a single crate.

pub mod core {
    pub use mediaprism_core::*;
}

pub mod inspect {
    pub use mediaprism_inspect::*;
}

pub use mediaprism_core::{decode_media_envelope, Media};
