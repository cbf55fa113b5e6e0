//! Sweep configuration
//!
//! Bounds are airspeeds in cm/s. The defaults reproduce the classic
//! comparison range of 500 to 4000 cm/s in 25 cm/s steps; a TOML file or
//! command-line flags can override them.
//!
//! # Example
//! ```
//! use tpasweep::config::SweepConfig;
//!
//! let mut config = SweepConfig::default();
//! config.step = 100.0;
//! config.validate().unwrap();
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SweepError};

/// Airspeed sweep bounds, in cm/s.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    /// First airspeed evaluated.
    pub start: f32,
    /// Exclusive upper bound; the sweep ends at the last value below it.
    pub stop: f32,
    /// Additive increment between steps.
    pub step: f32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: 500.0,
            stop: 4000.0,
            step: 25.0,
        }
    }
}

impl SweepConfig {
    /// Load sweep bounds from a TOML file. Missing keys fall back to the
    /// defaults; unknown keys are rejected.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SweepConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the bounds describe a finite, forward-moving sweep.
    pub fn validate(&self) -> Result<()> {
        if !(self.start.is_finite() && self.stop.is_finite() && self.step.is_finite()) {
            return Err(SweepError::Config("sweep bounds must be finite".to_string()));
        }
        if self.step <= 0.0 {
            return Err(SweepError::Config(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.start >= self.stop {
            return Err(SweepError::Config(format!(
                "start ({}) must be below stop ({})",
                self.start, self.stop
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SweepConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_or_negative_step_rejected() {
        let mut config = SweepConfig::default();
        config.step = 0.0;
        assert!(config.validate().is_err());
        config.step = -25.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_start_must_be_below_stop() {
        let mut config = SweepConfig::default();
        config.start = 4000.0;
        config.stop = 500.0;
        assert!(config.validate().is_err());
        config.stop = 4000.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        let mut config = SweepConfig::default();
        config.stop = f32::INFINITY;
        assert!(config.validate().is_err());
        config.stop = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_full_parse() {
        let config: SweepConfig = toml::from_str(
            "start = 100.0\nstop = 1000.0\nstep = 10.0\n",
        )
        .unwrap();
        assert_eq!(config.start, 100.0);
        assert_eq!(config.stop, 1000.0);
        assert_eq!(config.step, 10.0);
    }

    #[test]
    fn test_toml_missing_keys_use_defaults() {
        let config: SweepConfig = toml::from_str("step = 5.0\n").unwrap();
        assert_eq!(config.start, 500.0);
        assert_eq!(config.stop, 4000.0);
        assert_eq!(config.step, 5.0);
    }

    #[test]
    fn test_toml_unknown_key_rejected() {
        assert!(toml::from_str::<SweepConfig>("sped = 5.0\n").is_err());
    }
}
