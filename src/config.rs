//! Engine configuration.
//!
//! Every field has a default matching the plotting behaviour the UI expects,
//! so a JSON document only needs to name the values it overrides:
//!
//! ```json
//! { "continuous_intervals": 500, "precision_digits": 10 }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of equal sub-intervals a continuous range is split into.
pub const DEFAULT_CONTINUOUS_INTERVALS: usize = 1000;
/// Largest discrete support enumerated before striding kicks in.
pub const DEFAULT_DISCRETE_POINT_CAP: usize = 1000;
/// Significant decimal digits kept on sampled coordinates.
pub const DEFAULT_PRECISION_DIGITS: u32 = 12;
/// Window used when typed quantile bounds cannot be parsed.
pub const DEFAULT_FALLBACK_WINDOW: (f64, f64) = (0.005, 0.995);
/// Distributions that can be compared in one session.
pub const DEFAULT_MAX_SESSION_SLOTS: usize = 3;

/// Tunable limits of the evaluation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Sub-intervals for continuous sampling; `intervals + 1` points are evaluated.
    pub continuous_intervals: usize,
    /// Maximum discrete support size enumerated point by point.
    pub discrete_point_cap: usize,
    /// Significant digits used when rounding sampled x and y values.
    pub precision_digits: u32,
    /// Replacement bounds for unparseable quantile input.
    pub fallback_window: (f64, f64),
    /// Maximum number of distributions held by a [`Session`](crate::session::Session).
    pub max_session_slots: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            continuous_intervals: DEFAULT_CONTINUOUS_INTERVALS,
            discrete_point_cap: DEFAULT_DISCRETE_POINT_CAP,
            precision_digits: DEFAULT_PRECISION_DIGITS,
            fallback_window: DEFAULT_FALLBACK_WINDOW,
            max_session_slots: DEFAULT_MAX_SESSION_SLOTS,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check that every limit is usable by the sampler.
    pub fn validate(&self) -> Result<()> {
        if self.continuous_intervals == 0 {
            return Err(Error::Config(
                "continuous_intervals must be at least 1".to_string(),
            ));
        }
        if self.discrete_point_cap == 0 {
            return Err(Error::Config(
                "discrete_point_cap must be at least 1".to_string(),
            ));
        }
        if !(1..=17).contains(&self.precision_digits) {
            return Err(Error::Config(format!(
                "precision_digits must be between 1 and 17, got {}",
                self.precision_digits
            )));
        }
        let (low, high) = self.fallback_window;
        if !(0.0..=1.0).contains(&low) || !(0.0..=1.0).contains(&high) || low >= high {
            return Err(Error::Config(format!(
                "fallback_window must satisfy 0 <= low < high <= 1, got [{low}, {high}]"
            )));
        }
        if self.max_session_slots == 0 {
            return Err(Error::Config(
                "max_session_slots must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
