use serde::Deserialize;

use mediaprism_core::decoder::{DEFAULT_MAX_ENVELOPE_BYTES, DEFAULT_MAX_INFLATED_BYTES};
use mediaprism_core::error::{MediaError, Result};
use mediaprism_core::DecoderLimits;

const MIB: usize = 1024 * 1024;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InspectConfig {
    pub version: u32,

    #[serde(default)]
    pub decoder: DecoderSection,

    #[serde(default)]
    pub output: OutputSection,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            version: 1,
            decoder: DecoderSection::default(),
            output: OutputSection::default(),
        }
    }
}

impl InspectConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MediaError::BadConfig(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.decoder.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecoderSection {
    #[serde(default = "default_max_envelope_bytes")]
    pub max_envelope_bytes: usize,

    #[serde(default = "default_max_inflated_bytes")]
    pub max_inflated_bytes: usize,
}

impl Default for DecoderSection {
    fn default() -> Self {
        Self {
            max_envelope_bytes: default_max_envelope_bytes(),
            max_inflated_bytes: default_max_inflated_bytes(),
        }
    }
}

impl DecoderSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=256 * MIB).contains(&self.max_envelope_bytes) {
            return Err(MediaError::BadConfig(
                "decoder.max_envelope_bytes must be between 1 and 268435456".into(),
            ));
        }
        if self.max_inflated_bytes > 1024 * MIB {
            return Err(MediaError::BadConfig(
                "decoder.max_inflated_bytes must not exceed 1073741824".into(),
            ));
        }
        if self.max_inflated_bytes < self.max_envelope_bytes {
            return Err(MediaError::BadConfig(
                "decoder.max_inflated_bytes must be at least max_envelope_bytes".into(),
            ));
        }
        Ok(())
    }

    pub fn limits(&self) -> DecoderLimits {
        DecoderLimits {
            max_envelope_bytes: self.max_envelope_bytes,
            max_inflated_bytes: self.max_inflated_bytes,
        }
    }
}

fn default_max_envelope_bytes() -> usize {
    DEFAULT_MAX_ENVELOPE_BYTES
}
fn default_max_inflated_bytes() -> usize {
    DEFAULT_MAX_INFLATED_BYTES
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Summary,
}
