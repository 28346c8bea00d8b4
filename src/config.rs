//! Tool configuration and defaults
//!
//! Built-in settings live in a TOML file embedded at compile time, so the
//! binary works with no configuration present. A user-supplied file can
//! override individual values; anything missing falls back to the
//! defaults.

use std::fs;
use lazy_static::lazy_static;
use crate::raster::errors::{RasterError, RasterResult};
use crate::transform::interp::Interpolation;

lazy_static! {
    // Parse the embedded TOML at startup
    pub static ref DEFAULTS: PrepConfig = {
        let content = include_str!("../rasterprep.toml");
        PrepConfig::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in defaults: {}", e);
            PrepConfig::default()
        })
    };
}

/// Tool-wide settings with built-in defaults
#[derive(Debug, Clone)]
pub struct PrepConfig {
    /// File receiving the timestamped log lines
    pub log_file: String,
    /// Suffix inserted before the extension on processed copies
    pub save_suffix: String,
    /// Resampling filter used when none is requested
    pub interpolation: Interpolation,
}

impl Default for PrepConfig {
    fn default() -> Self {
        PrepConfig {
            log_file: "rasterprep.log".to_string(),
            save_suffix: "_processed".to_string(),
            interpolation: Interpolation::Linear,
        }
    }
}

impl PrepConfig {
    /// Parse settings from a TOML string
    ///
    /// Missing keys keep their defaults. An unknown interpolation name is
    /// an error rather than a silent fallback, since it points at a typo
    /// in the configuration.
    pub fn from_str(content: &str) -> RasterResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(RasterError::GenericError(
                format!("Failed to parse TOML: {}", e))),
        };

        let mut config = PrepConfig::default();

        if let Some(value) = toml_value.get("logging")
            .and_then(|t| t.get("log_file"))
            .and_then(|v| v.as_str()) {
            config.log_file = value.to_string();
        }

        if let Some(value) = toml_value.get("output")
            .and_then(|t| t.get("save_suffix"))
            .and_then(|v| v.as_str()) {
            config.save_suffix = value.to_string();
        }

        if let Some(name) = toml_value.get("processing")
            .and_then(|t| t.get("interpolation"))
            .and_then(|v| v.as_str()) {
            match Interpolation::from_name(name) {
                Some(interp) => config.interpolation = interp,
                None => return Err(RasterError::GenericError(
                    format!("Unknown interpolation '{}' in configuration", name))),
            }
        }

        Ok(config)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &str) -> RasterResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(RasterError::IoError(e)),
        };

        Self::from_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_parse() {
        assert_eq!(DEFAULTS.log_file, "rasterprep.log");
        assert_eq!(DEFAULTS.save_suffix, "_processed");
        assert_eq!(DEFAULTS.interpolation, Interpolation::Linear);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = PrepConfig::from_str("[output]\nsave_suffix = \"_eq\"\n").unwrap();
        assert_eq!(config.save_suffix, "_eq");
        assert_eq!(config.log_file, "rasterprep.log");
        assert_eq!(config.interpolation, Interpolation::Linear);
    }

    #[test]
    fn test_unknown_interpolation_is_rejected() {
        let result = PrepConfig::from_str("[processing]\ninterpolation = \"area\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        assert!(PrepConfig::from_str("not [even toml").is_err());
    }
}
