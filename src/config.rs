//! Parameter presets: the three slider values, serializable to JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::physics::{Parameters, DAMPING_RANGE, MASS_RANGE, STIFFNESS_RANGE};

/// A saved set of slider values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimConfig {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Parameters::default().into()
    }
}

impl From<Parameters> for SimConfig {
    fn from(params: Parameters) -> Self {
        Self {
            mass: params.mass,
            stiffness: params.stiffness,
            damping: params.damping,
        }
    }
}

impl SimConfig {
    /// Save the preset to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a preset from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// The preset clamped into the slider ranges, as live parameters.
    /// Hand-edited files outside the ranges are pulled back in rather than
    /// rejected.
    pub fn to_parameters(&self) -> Parameters {
        Parameters {
            mass: self.mass.clamp(*MASS_RANGE.start(), *MASS_RANGE.end()),
            stiffness: self
                .stiffness
                .clamp(*STIFFNESS_RANGE.start(), *STIFFNESS_RANGE.end()),
            damping: self
                .damping
                .clamp(*DAMPING_RANGE.start(), *DAMPING_RANGE.end()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let config = SimConfig {
            mass: 12.5,
            stiffness: 0.07,
            damping: 0.93,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_defaults_match_sliders() {
        let config = SimConfig::default();
        assert_eq!(config.mass, 5.0);
        assert_eq!(config.stiffness, 0.1);
        assert_eq!(config.damping, 0.995);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let config = SimConfig {
            mass: 1000.0,
            stiffness: -1.0,
            damping: 2.0,
        };
        let params = config.to_parameters();
        assert_eq!(params.mass, 15.0);
        assert_eq!(params.stiffness, 0.05);
        assert_eq!(params.damping, 0.999);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result: Result<SimConfig, _> = serde_json::from_str("{\"mass\": \"heavy\"}");
        assert!(result.is_err());
    }
}
