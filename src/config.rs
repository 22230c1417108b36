//! # Configuration
//!
//! Fretboard settings read from YAML. Every key is optional.
//!
//! ```yaml
//! frets: 24
//! catalog: classic
//! note-duration: 0.8
//! layout:
//!   fret-spacing: 50
//!   dot-radius: 10
//! ```
//!
//! ```rust
//! use fretboard::FretboardConfig;
//!
//! let config = FretboardConfig::from_yaml("frets: 24").unwrap();
//! assert_eq!(config.frets, 24);
//! assert_eq!(config.layout.fret_spacing, 40.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::CatalogVariant;
use crate::error::FretboardError;
use crate::geometry::Layout;
use crate::mapper::DEFAULT_FRETS;
use crate::playback::DEFAULT_DURATION;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FretboardConfig {
    pub frets: usize,
    pub catalog: CatalogVariant,
    /// Seconds a clicked note sounds for.
    pub note_duration: f64,
    pub layout: Layout,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        FretboardConfig {
            frets: DEFAULT_FRETS,
            catalog: CatalogVariant::default(),
            note_duration: DEFAULT_DURATION,
            layout: Layout::default(),
        }
    }
}

impl FretboardConfig {
    pub fn from_yaml(source: &str) -> Result<Self, FretboardError> {
        // An empty document deserializes as null rather than an empty map
        if source.trim().is_empty() {
            return Ok(FretboardConfig::default());
        }
        let config: FretboardConfig =
            serde_yaml::from_str(source).map_err(|e| FretboardError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FretboardError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            FretboardError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        FretboardConfig::from_yaml(&source)
    }

    pub fn validate(&self) -> Result<(), FretboardError> {
        if self.frets == 0 {
            return Err(FretboardError::ConfigError(
                "frets must be at least 1".to_string(),
            ));
        }
        if !(self.note_duration > 0.0) {
            return Err(FretboardError::ConfigError(format!(
                "note-duration must be positive, got {}",
                self.note_duration
            )));
        }
        let layout = &self.layout;
        let lengths = [
            ("fret-spacing", layout.fret_spacing),
            ("string-spacing", layout.string_spacing),
            ("dot-radius", layout.dot_radius),
            ("inlay-radius", layout.inlay_radius),
        ];
        for (name, value) in lengths {
            if !(value > 0.0) {
                return Err(FretboardError::ConfigError(format!(
                    "layout.{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
