//! Domain error types for hpicker
//!
//! - `PickerError` for invalid picker configurations
//! - `ConfigError` for config file problems
//! - `HpickerError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for hpicker
#[derive(Debug, Error)]
pub enum HpickerError {
    #[error("Picker error: {0}")]
    Picker(#[from] PickerError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Precondition violations rejected when a picker is built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("Picker needs at least one item")]
    EmptyItems,

    #[error("Visible item count must be positive, got {0}")]
    InvalidVisibleCount(usize),
}

/// Errors related to loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {flag}: {value}")]
    InvalidArgument { flag: &'static str, value: String },
}

/// Result type alias for HpickerError
pub type Result<T> = std::result::Result<T, HpickerError>;

/// Result type alias for PickerError
pub type PickerResult<T> = std::result::Result<T, PickerError>;
