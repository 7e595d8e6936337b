//! Projection settings.
//!
//! The defaults reproduce the calculator's fixed assumptions: a five-year
//! horizon and 3% annual inflation on recurring costs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of projected years when nothing else is configured.
pub const DEFAULT_HORIZON: usize = 5;

/// Annual inflation applied to recurring costs.
pub const DEFAULT_INFLATION_RATE: f64 = 0.03;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// At least one year must be projected.
    #[error("horizon must be at least one year")]
    ZeroHorizon,

    /// The inflation rate must be finite and greater than -100%.
    #[error("inflation rate must be finite and greater than -1, got {0}")]
    InvalidInflationRate(f64),
}

/// Settings for a [`ProjectionEngine`](crate::ProjectionEngine).
///
/// Missing fields fall back to their defaults when deserialized, so a
/// scenario file may set only the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Number of projected years.
    pub horizon: usize,

    /// Annual inflation as a fraction (0.03 means 3%).
    pub inflation_rate: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            inflation_rate: DEFAULT_INFLATION_RATE,
        }
    }
}

impl ProjectionConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `horizon` is zero
    /// - `inflation_rate` is not finite or is `<= -1`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        if !self.inflation_rate.is_finite() || self.inflation_rate <= -1.0 {
            return Err(ConfigError::InvalidInflationRate(self.inflation_rate));
        }
        Ok(())
    }

    /// Year-over-year multiplier for recurring costs.
    pub fn inflation_factor(&self) -> f64 {
        1.0 + self.inflation_rate
    }
}
