//! Analysis configuration.
//!
//! All run parameters live in one record that is passed explicitly to the
//! analysis. It can be loaded from a JSON file; absent fields take the
//! defaults below.
//!
//! ```json
//! {
//!   "hypothesized_value": 400,
//!   "significance_level": 0.05,
//!   "decimals": 3
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{HypotestError, Result};
use crate::report::MAX_DECIMALS;
use crate::stats::TestConfig;

/// Parameters of an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Hypothesized population mean μ₀.
    pub hypothesized_value: f64,
    /// Significance level α in (0, 1).
    pub significance_level: f64,
    /// Decimal places in reports.
    pub decimals: u32,
    /// Plotting position α for quantiles.
    pub alphap: f64,
    /// Plotting position β for quantiles.
    pub betap: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            hypothesized_value: 400.0,
            significance_level: 0.05,
            decimals: 3,
            alphap: 1.0 / 3.0,
            betap: 1.0 / 3.0,
        }
    }
}

impl AnalysisConfig {
    /// Reads and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::Io`] if the file cannot be read,
    /// [`HypotestError::Serialization`] for malformed JSON, and
    /// [`HypotestError::InvalidInput`] if a value is out of range.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// See [`AnalysisConfig::load`].
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::InvalidInput`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        self.test_config().validate()?;
        if self.decimals > MAX_DECIMALS {
            return Err(HypotestError::invalid(format!(
                "decimals must be at most {MAX_DECIMALS}, got {}",
                self.decimals
            )));
        }
        for (name, value) in [("alphap", self.alphap), ("betap", self.betap)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(HypotestError::invalid(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }

    /// The μ₀/α pair consumed by [`OneSampleTTest`](crate::stats::OneSampleTTest).
    #[must_use]
    pub fn test_config(&self) -> TestConfig {
        TestConfig {
            hypothesized_value: self.hypothesized_value,
            significance_level: self.significance_level,
        }
    }
}
