//! Reproducible description of a flow field run.
//!
//! A [`Seed`] captures everything needed to replay a run: engine name,
//! surface dimensions, parameter overrides, PRNG seed, and frame count.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reproducible description of a run.
///
/// Two identical `Seed` values fed to the same binary produce bit-identical
/// particle trajectories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    pub engine: String,
    pub width: usize,
    pub height: usize,
    pub params: serde_json::Value,
    pub seed: u64,
    pub steps: usize,
}

impl Seed {
    /// Creates a new Seed with default params (`{}`) and steps (`0`).
    pub fn new(engine: &str, width: usize, height: usize, seed: u64) -> Self {
        Self {
            engine: engine.to_string(),
            width,
            height,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            steps: 0,
        }
    }

    /// Validates that the seed has non-zero dimensions and that
    /// `width * height` does not overflow.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(EngineError::InvalidDimensions)?;
        Ok(())
    }

    /// Reads and validates a seed from a JSON file.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Io(format!("{}: {e}", path.display())))?;
        let seed: Seed = serde_json::from_str(&text)
            .map_err(|e| EngineError::Io(format!("{}: {e}", path.display())))?;
        seed.validate()?;
        Ok(seed)
    }

    /// Writes the seed as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), EngineError> {
        let text =
            serde_json::to_string_pretty(self).map_err(|e| EngineError::Io(e.to_string()))?;
        std::fs::write(path, text).map_err(|e| EngineError::Io(format!("{}: {e}", path.display())))
    }
}
