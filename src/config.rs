//! JSON batch configuration.

use crate::foundation::core::GenerateRequest;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::generator::lightning_beam::LightningBeamGenerator;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Default number of frames per sequence.
pub const DEFAULT_FRAME_COUNT: u32 = 30;
/// Default frame edge length in pixels.
pub const DEFAULT_SIZE: u32 = 256;

/// What to generate: generator, sequence shape, worker override and parameter patch.
///
/// ```json
/// { "generator": "Slash Trail", "frame_count": 12, "size": 128, "params": { "circular": true } }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpriteConfig {
    /// Registry name of the generator.
    pub generator: String,
    /// Frames in the sequence.
    pub frame_count: u32,
    /// Square frame size in pixels.
    pub size: u32,
    /// Worker override; detected when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
    /// Patch merged over the generator's default parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            generator: LightningBeamGenerator::NAME.to_owned(),
            frame_count: DEFAULT_FRAME_COUNT,
            size: DEFAULT_SIZE,
            threads: None,
            params: None,
        }
    }
}

impl SpriteConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SpriteResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SpriteError::config(format!("parse sprite config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SpriteResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SpriteError::config(format!("open sprite config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check ranges and shapes that serde cannot.
    pub fn validate(&self) -> SpriteResult<()> {
        if self.generator.trim().is_empty() {
            return Err(SpriteError::validation("generator name must not be empty"));
        }
        self.request()?;
        if let Some(0) = self.threads {
            return Err(SpriteError::validation("'threads' must be >= 1 when set"));
        }
        if let Some(params) = &self.params
            && !params.is_object()
        {
            return Err(SpriteError::validation("'params' must be a JSON object"));
        }
        Ok(())
    }

    /// The batch request described by this config.
    pub fn request(&self) -> SpriteResult<GenerateRequest> {
        GenerateRequest::new(self.frame_count, self.size)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
