//! Distribution providers used by the hypothesis tests.
//!
//! The t test needs two collaborators: the Student's t CDF (and its inverse
//! for critical values) and a power function. Both are traits so callers can
//! swap in a reference implementation; the defaults delegate to `statrs`.

use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::error::{HypotestError, Result};
use crate::stats::hypothesis::Alternative;

/// Central Student's t distribution with `df` degrees of freedom.
pub trait StudentTCdf: Send + Sync {
    /// P(T <= x).
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::Distribution`] if `df` is not a valid
    /// number of degrees of freedom.
    fn cdf(&self, x: f64, df: f64) -> Result<f64>;

    /// Quantile function: the `x` with `cdf(x, df) == p`.
    ///
    /// # Errors
    ///
    /// Returns an error for `p` outside (0, 1) or invalid `df`.
    fn inverse_cdf(&self, p: f64, df: f64) -> Result<f64>;
}

/// Power of a one-sample t test.
pub trait PowerFunction: Send + Sync {
    /// Probability of rejecting H₀ for a standardized `effect_size` with
    /// `nobs` observations at level `alpha` under `alternative`.
    ///
    /// # Errors
    ///
    /// Returns an error when `nobs < 2`, `alpha` is outside (0, 1) or the
    /// effect size is not finite.
    fn power(&self, effect_size: f64, nobs: usize, alpha: f64, alternative: Alternative)
        -> Result<f64>;
}

/// [`StudentTCdf`] backed by [`statrs::distribution::StudentsT`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatrsStudentT;

impl StatrsStudentT {
    fn distribution(df: f64) -> Result<StudentsT> {
        StudentsT::new(0.0, 1.0, df)
            .map_err(|e| HypotestError::Distribution(format!("t distribution (df={df}): {e}")))
    }
}

impl StudentTCdf for StatrsStudentT {
    fn cdf(&self, x: f64, df: f64) -> Result<f64> {
        Ok(Self::distribution(df)?.cdf(x))
    }

    fn inverse_cdf(&self, p: f64, df: f64) -> Result<f64> {
        if !(p > 0.0 && p < 1.0) {
            return Err(HypotestError::invalid(format!(
                "t quantile probability must be in (0, 1), got {p}"
            )));
        }
        Ok(Self::distribution(df)?.inverse_cdf(p))
    }
}

/// Standard normal distribution.
pub(crate) fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0).map_err(|e| HypotestError::Distribution(e.to_string()))
}
