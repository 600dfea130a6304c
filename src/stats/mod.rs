//! Descriptive statistics and one-sample hypothesis testing.
//!
//! - Validated samples with missing-value filtering
//! - Parametric summary (mean, standard deviation, standard error)
//! - Non-parametric summary using plotting-position quantiles
//!   (Hyndman & Fan 1996, `alphap`/`betap` parameterisation)
//! - One-sample t test under three alternatives, with power
//! - Normal probability plot coordinates
//!
//! # Examples
//!
//! ```
//! use hypotest::stats::Sample;
//!
//! let sample = Sample::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).expect("finite values");
//! let summary = sample.nonparametric_summary(1.0 / 3.0, 1.0 / 3.0).expect("valid sample");
//! assert_eq!(summary.median, 3.0);
//! assert_eq!(summary.min, 1.0);
//! assert_eq!(summary.max, 5.0);
//! ```

pub mod distribution;
pub mod hypothesis;
pub mod power;
pub mod probplot;

pub use distribution::{PowerFunction, StatrsStudentT, StudentTCdf};
pub use hypothesis::{
    confidence_interval, run_one_sample_t_test, ttest_1samp, Alternative, ConfidenceInterval,
    OneSampleTTest, PreparedTest, ScenarioSet, TTestResult, TestConfig, TestResult,
};
pub use power::NoncentralTPower;
pub use probplot::{normal_probability_plot, ProbabilityPlot};

use serde::Serialize;
use statrs::statistics::Statistics;

use crate::error::{HypotestError, Result};

/// Confidence level of the interval reported in [`ParametricSummary`].
pub const SUMMARY_CONFIDENCE_LEVEL: f64 = 0.95;

/// A non-empty sequence of finite observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

/// Moment-based summary of a sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParametricSummary {
    pub n: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub variance: f64,
    /// s / √n
    pub standard_error: f64,
    /// Lower bound of the 95% t interval for the mean.
    pub ci_lower: f64,
    /// Upper bound of the 95% t interval for the mean.
    pub ci_upper: f64,
}

/// Order-statistic summary of a sample: five-number summary plus
/// Tukey fences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NonparametricSummary {
    pub n: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// q3 − q1
    pub iqr: f64,
    /// q1 − 1.5·IQR
    pub lower_inner_fence: f64,
    /// q3 + 1.5·IQR
    pub upper_inner_fence: f64,
    /// q1 − 3·IQR
    pub lower_outer_fence: f64,
    /// q3 + 3·IQR
    pub upper_outer_fence: f64,
}

impl Sample {
    /// Wraps `values`.
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::InvalidInput`] if `values` is empty or
    /// contains NaN or infinite values.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(HypotestError::invalid("sample is empty"));
        }
        if let Some((i, bad)) = values.iter().enumerate().find(|(_, x)| !x.is_finite()) {
            return Err(HypotestError::invalid(format!(
                "sample value {i} is not finite: {bad}"
            )));
        }
        Ok(Self { values })
    }

    /// Builds a sample from raw observations, dropping missing values
    /// (`None` and NaN).
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::InvalidInput`] if nothing remains after
    /// filtering or an infinite value is present.
    pub fn from_observations<I>(observations: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let values = observations
            .into_iter()
            .flatten()
            .filter(|x| !x.is_nan())
            .collect();
        Self::new(values)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the sample holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.values.iter().mean()
    }

    /// Sample standard deviation (n − 1 denominator); NaN for n = 1.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.values.iter().std_dev()
    }

    /// Values in ascending order.
    #[must_use]
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Quantile `p` with plotting positions `(alphap, betap)`.
    ///
    /// `alphap = betap = 1/3` gives the approximately median-unbiased
    /// estimate (Hyndman & Fan type 8); `alphap = betap = 1` gives linear
    /// interpolation of the order statistics (type 7).
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::InvalidInput`] if `p` is outside [0, 1] or
    /// the plotting positions are outside [0, 1].
    pub fn quantile(&self, p: f64, alphap: f64, betap: f64) -> Result<f64> {
        validate_plotting_positions(alphap, betap)?;
        if !(0.0..=1.0).contains(&p) {
            return Err(HypotestError::invalid(format!(
                "quantile must be in [0, 1], got {p}"
            )));
        }
        Ok(plotting_position_quantile(&self.sorted(), p, alphap, betap))
    }

    /// Moment-based summary.
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::InvalidInput`] for fewer than 2 values.
    pub fn parametric_summary(&self) -> Result<ParametricSummary> {
        let n = self.len();
        if n < 2 {
            return Err(HypotestError::invalid(format!(
                "parametric summary requires at least 2 observations, got {n}"
            )));
        }
        let sorted = self.sorted();
        let mean = self.mean();
        let variance = self.values.iter().variance();
        let std_dev = variance.sqrt();
        let standard_error = std_dev / (n as f64).sqrt();
        let critical = StatrsStudentT
            .inverse_cdf(1.0 - (1.0 - SUMMARY_CONFIDENCE_LEVEL) / 2.0, (n - 1) as f64)?;

        Ok(ParametricSummary {
            n,
            min: sorted[0],
            max: sorted[n - 1],
            mean,
            std_dev,
            variance,
            standard_error,
            ci_lower: mean - critical * standard_error,
            ci_upper: mean + critical * standard_error,
        })
    }

    /// Order-statistic summary with plotting positions `(alphap, betap)`.
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::InvalidInput`] for plotting positions outside
    /// [0, 1].
    pub fn nonparametric_summary(&self, alphap: f64, betap: f64) -> Result<NonparametricSummary> {
        validate_plotting_positions(alphap, betap)?;
        let sorted = self.sorted();
        let q = |p| plotting_position_quantile(&sorted, p, alphap, betap);
        let (q1, median, q3) = (q(0.25), q(0.5), q(0.75));
        let iqr = q3 - q1;

        Ok(NonparametricSummary {
            n: sorted.len(),
            min: sorted[0],
            q1,
            median,
            q3,
            max: sorted[sorted.len() - 1],
            iqr,
            lower_inner_fence: q1 - 1.5 * iqr,
            upper_inner_fence: q3 + 1.5 * iqr,
            lower_outer_fence: q1 - 3.0 * iqr,
            upper_outer_fence: q3 + 3.0 * iqr,
        })
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = HypotestError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl AsRef<[f64]> for Sample {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

fn validate_plotting_positions(alphap: f64, betap: f64) -> Result<()> {
    for (name, value) in [("alphap", alphap), ("betap", betap)] {
        if !(0.0..=1.0).contains(&value) {
            return Err(HypotestError::invalid(format!(
                "{name} must be in [0, 1], got {value}"
            )));
        }
    }
    Ok(())
}

/// Plotting-position quantile of an ascending, non-empty slice.
///
/// m = α + p(1 − α − β), j = ⌊clamp(np + m, 1, n − 1)⌋,
/// g = clamp(np + m − j, 0, 1), Q = (1 − g)·x₍ⱼ₎ + g·x₍ⱼ₊₁₎
fn plotting_position_quantile(sorted: &[f64], p: f64, alphap: f64, betap: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let m = alphap + p * (1.0 - alphap - betap);
    let aleph = n as f64 * p + m;
    let j = aleph.clamp(1.0, (n - 1) as f64).floor();
    let g = (aleph - j).clamp(0.0, 1.0);
    let j = j as usize;
    (1.0 - g) * sorted[j - 1] + g * sorted[j]
}

#[cfg(test)]
mod tests {
    use super::*;

    const THIRD: f64 = 1.0 / 3.0;

    fn sample(values: &[f64]) -> Sample {
        Sample::new(values.to_vec()).expect("valid sample")
    }

    #[test]
    fn test_new_rejects_empty_and_non_finite() {
        assert!(Sample::new(vec![]).is_err());
        assert!(Sample::new(vec![1.0, f64::NAN]).is_err());
        assert!(Sample::new(vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn test_from_observations_drops_missing() {
        let s = Sample::from_observations([Some(1.0), None, Some(f64::NAN), Some(3.0)])
            .expect("two values remain");
        assert_eq!(s.values(), &[1.0, 3.0]);
        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_from_observations_all_missing() {
        let err = Sample::from_observations([None, Some(f64::NAN)]).expect_err("nothing left");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_from_observations_keeps_infinite_error() {
        assert!(Sample::from_observations([Some(1.0), Some(f64::INFINITY)]).is_err());
    }

    #[test]
    fn test_mean_and_std_dev() {
        let s = sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((s.mean() - 5.0).abs() < 1e-12);
        // Σ(x − 5)² = 32, s² = 32 / 7
        assert!((s.std_dev() - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_quantile_type8_odd() {
        let s = sample(&[5.0, 1.0, 4.0, 2.0, 3.0]);
        assert!((s.quantile(0.5, THIRD, THIRD).expect("valid") - 3.0).abs() < 1e-12);
        assert!((s.quantile(0.25, THIRD, THIRD).expect("valid") - 5.0 / 3.0).abs() < 1e-12);
        assert!((s.quantile(0.75, THIRD, THIRD).expect("valid") - 13.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_quantile_extremes() {
        let s = sample(&[3.0, 1.0, 2.0, 10.0]);
        assert_eq!(s.quantile(0.0, THIRD, THIRD).expect("valid"), 1.0);
        assert_eq!(s.quantile(1.0, THIRD, THIRD).expect("valid"), 10.0);
    }

    #[test]
    fn test_quantile_type7_matches_linear_interpolation() {
        let s = sample(&[1.0, 2.0, 3.0, 4.0]);
        // h = (n − 1)p = 0.75 → 1 + 0.75
        assert!((s.quantile(0.25, 1.0, 1.0).expect("valid") - 1.75).abs() < 1e-12);
        assert!((s.quantile(0.5, 1.0, 1.0).expect("valid") - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_quantile_single_value() {
        let s = sample(&[42.0]);
        assert_eq!(s.quantile(0.3, THIRD, THIRD).expect("valid"), 42.0);
    }

    #[test]
    fn test_quantile_invalid() {
        let s = sample(&[1.0, 2.0]);
        assert!(s.quantile(1.5, THIRD, THIRD).is_err());
        assert!(s.quantile(0.5, -0.1, THIRD).is_err());
        assert!(s.quantile(0.5, THIRD, 2.0).is_err());
    }

    #[test]
    fn test_parametric_summary() {
        let s = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let summary = s.parametric_summary().expect("valid sample");
        assert_eq!(summary.n, 5);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert!((summary.mean - 3.0).abs() < 1e-12);
        assert!((summary.variance - 2.5).abs() < 1e-12);
        assert!((summary.standard_error - (0.5_f64).sqrt()).abs() < 1e-12);
        // t_{0.975, 4} = 2.7764
        assert!((summary.ci_upper - (3.0 + 2.7764 * 0.5_f64.sqrt())).abs() < 1e-3);
        assert!((summary.mean - summary.ci_lower - (summary.ci_upper - summary.mean)).abs() < 1e-9);
    }

    #[test]
    fn test_parametric_summary_requires_two() {
        assert!(sample(&[1.0]).parametric_summary().is_err());
    }

    #[test]
    fn test_parametric_summary_constant_sample() {
        let summary = sample(&[4.0, 4.0, 4.0]).parametric_summary().expect("valid");
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.ci_lower, summary.ci_upper);
    }

    #[test]
    fn test_nonparametric_summary() {
        let s = sample(&[5.0, 1.0, 4.0, 2.0, 3.0]);
        let summary = s.nonparametric_summary(THIRD, THIRD).expect("valid");
        assert_eq!(summary.n, 5);
        assert_eq!(summary.median, 3.0);
        assert!((summary.iqr - 8.0 / 3.0).abs() < 1e-12);
        assert!((summary.lower_inner_fence - (5.0 / 3.0 - 4.0)).abs() < 1e-12);
        assert!((summary.upper_outer_fence - (13.0 / 3.0 + 8.0)).abs() < 1e-12);
    }
}
