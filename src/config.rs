//! Configuration file support for hpicker.
//!
//! Configuration is loaded from `~/.config/hpicker/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/hpicker/config.toml
//! items = ["XS", "S", "M", "L", "XL"]
//! visible_items = 3
//!
//! [wheel]
//! debounce_ms = 80
//! threshold = 2
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Number of labels visible at once when nothing else is configured.
pub const DEFAULT_VISIBLE_ITEMS: usize = 6;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Labels offered by the picker
    pub items: Option<Vec<String>>,

    /// How many labels fit across the picker
    pub visible_items: Option<usize>,

    /// Mouse wheel handling
    pub wheel: WheelConfig,
}

/// Mouse wheel debouncing, see [`crate::scroll::ScrollHelper`].
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct WheelConfig {
    /// Window for accumulating wheel ticks (milliseconds)
    pub debounce_ms: u64,

    /// Wheel ticks needed to move one item
    pub threshold: i32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 50,
            threshold: 1,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        match Self::load_from(&Self::config_path()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hpicker")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(
        mut self,
        items: Option<Vec<String>>,
        visible_items: Option<usize>,
    ) -> Self {
        if items.is_some() {
            self.items = items;
        }
        if visible_items.is_some() {
            self.visible_items = visible_items;
        }
        self
    }

    /// Get the picker labels, defaulting to "1" through "10".
    pub fn items(&self) -> Vec<String> {
        self.items
            .clone()
            .unwrap_or_else(|| (1..=10).map(|i| i.to_string()).collect())
    }

    /// Get the visible item count, falling back to environment variable or default.
    pub fn visible_items(&self) -> usize {
        self.visible_items
            .or_else(|| {
                std::env::var("HPICKER_VISIBLE_ITEMS")
                    .ok()
                    .and_then(|v| v.parse().ok())
            })
            .unwrap_or(DEFAULT_VISIBLE_ITEMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.items.is_none());
        assert!(config.visible_items.is_none());
        assert_eq!(config.items().len(), 10);
        assert_eq!(config.items()[0], "1");
        assert_eq!(config.items()[9], "10");
        assert_eq!(config.wheel, WheelConfig::default());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            items = ["XS", "S", "M"]
            visible_items = 3

            [wheel]
            debounce_ms = 80
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.items(), vec!["XS", "S", "M"]);
        assert_eq!(config.visible_items, Some(3));
        assert_eq!(config.wheel.debounce_ms, 80);
        assert_eq!(config.wheel.threshold, 1);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = Config {
            items: Some(vec!["a".into()]),
            visible_items: Some(2),
            ..Default::default()
        }
        .with_overrides(None, Some(9));

        assert_eq!(config.items, Some(vec!["a".to_string()]));
        assert_eq!(config.visible_items, Some(9));
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("hpicker-missing-config.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let path = std::env::temp_dir().join(format!("hpicker-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "visible_items = \"many\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("hpicker-bad-"));

        let _ = std::fs::remove_file(&path);
    }
}
