//! Inspect config loader (strict parsing).

pub mod schema;

use std::fs;

use mediaprism_core::error::{MediaError, Result};

pub use schema::{DecoderSection, InspectConfig, OutputFormat, OutputSection};

pub fn load_from_file(path: &str) -> Result<InspectConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MediaError::Io(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<InspectConfig> {
    let cfg: InspectConfig = serde_yaml::from_str(s)
        .map_err(|e| MediaError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
