//! Configuration for the measurement engine.
//!
//! Settings can be exported and imported as JSON, so different front ends
//! (desktop, touch) share one measurement behavior.

use serde::{Deserialize, Serialize};

use crate::constants::{OVERLAY_EXTENT, POINT_HIT_RADIUS};

/// Log level setting for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Measurement settings that can be exported and imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Clamp computed percentages to `[0, 100]`
    #[serde(default = "default_clamp")]
    pub clamp: bool,

    /// Landmark hit radius in screen pixels (divided by the display scale
    /// before hit-testing, so picking feels the same at any zoom)
    #[serde(default = "default_hit_radius")]
    pub hit_radius: f32,

    /// Half-length of overlay construction lines in image pixels
    #[serde(default = "default_overlay_extent")]
    pub overlay_extent: f32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_clamp() -> bool {
    true
}

fn default_hit_radius() -> f32 {
    POINT_HIT_RADIUS
}

fn default_overlay_extent() -> f32 {
    OVERLAY_EXTENT
}

impl MeasureConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            clamp: default_clamp(),
            hit_radius: default_hit_radius(),
            overlay_extent: default_overlay_extent(),
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "hipmark-config.json"
    }

    /// Get the default config file path for auto-load/save.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("hipmark").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home| {
                home.join(".config")
                    .join("hipmark")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(&path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MeasureConfig::default();
        assert!(config.clamp);
        assert_eq!(config.hit_radius, POINT_HIT_RADIUS);
        assert_eq!(config.overlay_extent, OVERLAY_EXTENT);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = MeasureConfig::new();
        config.clamp = false;
        config.hit_radius = 14.0;

        let json = config.to_json().expect("serialize config");
        let loaded = MeasureConfig::from_json(&json).expect("parse config");
        assert!(!loaded.clamp);
        assert_eq!(loaded.hit_radius, 14.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded = MeasureConfig::from_json(r#"{"version": 1}"#).expect("parse partial config");
        assert!(loaded.clamp);
        assert_eq!(loaded.hit_radius, POINT_HIT_RADIUS);
    }

    #[test]
    fn test_version_too_new_is_rejected() {
        let json = format!(r#"{{"version": {}}}"#, CONFIG_VERSION + 1);
        match MeasureConfig::from_json(&json) {
            Err(ConfigError::VersionTooNew { file_version, .. }) => {
                assert_eq!(file_version, CONFIG_VERSION + 1);
            }
            other => panic!("Expected VersionTooNew, got {:?}", other.map(|c| c.version)),
        }
    }

    #[test]
    fn test_log_level_filter_mapping() {
        assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
        assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
    }
}
