//! Statistical power of the one-sample t test.
//!
//! Under H₁ the t statistic follows a noncentral t distribution with
//! `df = n - 1` and noncentrality `δ = d·√n`. The rejection region comes from
//! the central t quantiles at `α` (one-sided) or `α/2` (two-sided), and power
//! is the noncentral mass that falls inside it.
//!
//! `statrs` has no noncentral t, so its CDF is computed from the mixture
//! representation
//!
//! ```text
//! P(T' <= x) = ∫₀^∞ Φ(x·w/√df − δ) · χ_df(w) dw
//! ```
//!
//! where `χ_df` is the chi density. The integrand is smooth and the chi
//! density is concentrated within a few units of `√df`, so composite Simpson
//! over `√df ± 12` is accurate to well below the precision reported.
//!
//! # Example
//!
//! ```
//! use hypotest::stats::distribution::PowerFunction;
//! use hypotest::stats::hypothesis::Alternative;
//! use hypotest::stats::power::NoncentralTPower;
//!
//! let power = NoncentralTPower::default()
//!     .power(0.5, 30, 0.05, Alternative::TwoSided)
//!     .expect("valid inputs");
//! assert!(power > 0.7 && power < 0.8);
//! ```

use statrs::distribution::ContinuousCDF;
use statrs::function::gamma::ln_gamma;
use std::f64::consts::LN_2;

use crate::error::{HypotestError, Result};
use crate::stats::distribution::{standard_normal, PowerFunction, StatrsStudentT, StudentTCdf};
use crate::stats::hypothesis::Alternative;

/// Half-width of the integration window around `√df`.
const CHI_SPAN: f64 = 12.0;

/// Default number of Simpson sub-intervals.
pub const DEFAULT_INTERVALS: usize = 2000;

/// [`PowerFunction`] based on the noncentral t distribution.
#[derive(Debug, Clone)]
pub struct NoncentralTPower<D = StatrsStudentT> {
    cdf: D,
    intervals: usize,
}

impl Default for NoncentralTPower<StatrsStudentT> {
    fn default() -> Self {
        Self::new(StatrsStudentT)
    }
}

impl<D: StudentTCdf> NoncentralTPower<D> {
    /// Power function using `cdf` for the critical values.
    #[must_use]
    pub fn new(cdf: D) -> Self {
        Self {
            cdf,
            intervals: DEFAULT_INTERVALS,
        }
    }

    /// Overrides the number of Simpson sub-intervals (rounded up to even,
    /// minimum 2).
    #[must_use]
    pub fn with_intervals(mut self, intervals: usize) -> Self {
        let intervals = intervals.max(2);
        self.intervals = intervals + intervals % 2;
        self
    }

    /// Number of Simpson sub-intervals in use.
    #[must_use]
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// P(T' <= x) for a noncentral t with `df` degrees of freedom and
    /// noncentrality `nc`.
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::InvalidInput`] for non-positive `df` or
    /// non-finite arguments.
    pub fn noncentral_t_cdf(&self, x: f64, df: f64, nc: f64) -> Result<f64> {
        if !(df > 0.0) || !df.is_finite() {
            return Err(HypotestError::invalid(format!(
                "degrees of freedom must be positive, got {df}"
            )));
        }
        if !nc.is_finite() || x.is_nan() {
            return Err(HypotestError::invalid(format!(
                "noncentral t arguments must be finite (x={x}, nc={nc})"
            )));
        }
        if x == f64::INFINITY {
            return Ok(1.0);
        }
        if x == f64::NEG_INFINITY {
            return Ok(0.0);
        }

        let normal = standard_normal()?;
        let root_df = df.sqrt();
        let ln_norm = (1.0 - df / 2.0) * LN_2 - ln_gamma(df / 2.0);

        let lo = (root_df - CHI_SPAN).max(0.0);
        let hi = root_df + CHI_SPAN;
        let h = (hi - lo) / self.intervals as f64;

        let integrand = |w: f64| chi_density(w, df, ln_norm) * normal.cdf(x * w / root_df - nc);

        let mut sum = integrand(lo) + integrand(hi);
        for i in 1..self.intervals {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            sum += weight * integrand(lo + i as f64 * h);
        }

        Ok((sum * h / 3.0).clamp(0.0, 1.0))
    }
}

impl<D: StudentTCdf> PowerFunction for NoncentralTPower<D> {
    fn power(
        &self,
        effect_size: f64,
        nobs: usize,
        alpha: f64,
        alternative: Alternative,
    ) -> Result<f64> {
        if nobs < 2 {
            return Err(HypotestError::invalid(format!(
                "power requires at least 2 observations, got {nobs}"
            )));
        }
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(HypotestError::invalid(format!(
                "alpha must be in (0, 1), got {alpha}"
            )));
        }
        if !effect_size.is_finite() {
            return Err(HypotestError::invalid(format!(
                "effect size must be finite, got {effect_size}"
            )));
        }

        let df = (nobs - 1) as f64;
        let nc = effect_size * (nobs as f64).sqrt();
        let tail_alpha = match alternative {
            Alternative::TwoSided => alpha / 2.0,
            Alternative::Less | Alternative::Greater => alpha,
        };

        let mut power = 0.0;
        if matches!(alternative, Alternative::TwoSided | Alternative::Greater) {
            let crit_upper = self.cdf.inverse_cdf(1.0 - tail_alpha, df)?;
            power += 1.0 - self.noncentral_t_cdf(crit_upper, df, nc)?;
        }
        if matches!(alternative, Alternative::TwoSided | Alternative::Less) {
            let crit_lower = self.cdf.inverse_cdf(tail_alpha, df)?;
            power += self.noncentral_t_cdf(crit_lower, df, nc)?;
        }

        Ok(power.clamp(0.0, 1.0))
    }
}

/// Chi density with `df` degrees of freedom; `ln_norm` is
/// `(1 - df/2)·ln 2 − ln Γ(df/2)`.
fn chi_density(w: f64, df: f64, ln_norm: f64) -> f64 {
    if w <= 0.0 {
        // Finite and non-zero at the origin only for df == 1.
        return if df == 1.0 { ln_norm.exp() } else { 0.0 };
    }
    (ln_norm + (df - 1.0) * w.ln() - w * w / 2.0).exp()
}

#[cfg(test)]
#[path = "power_tests.rs"]
mod tests;
