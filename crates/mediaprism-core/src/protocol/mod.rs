//! Wire-level modules.
//!
//! - `reader`: TL primitives over a borrowed cursor.
//! - `schema`: photo/document constructors and the generic deserializer.
//! - `gzip`: capped inflate for packed payloads.
//! - `envelope`: signature detection that picks the stream to deserialize.
//!
//! All parsers are panic-free: malformed input is reported as `MediaError`
//! instead of panicking or indexing raw buffers.

pub mod envelope;
pub mod gzip;
pub mod reader;
pub mod schema;
