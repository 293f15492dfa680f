//! Error types for springlab.

use std::fmt;

/// Errors that can occur while saving or loading a parameter preset.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read or write the preset file.
    Io(std::io::Error),
    /// The preset file is not valid JSON for a `SimConfig`.
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to access preset file: {}", e),
            ConfigError::Json(e) => write!(f, "Invalid preset file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}
