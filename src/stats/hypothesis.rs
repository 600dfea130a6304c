//! One-sample hypothesis testing.
//!
//! A one-sample t test answers:
//!
//! - Is the average of a sample different from a specified value?
//! - Is the average of a sample less than a specified value?
//! - Is the average of a sample greater than a specified value?
//! - What range of values likely includes the population average?
//!
//! The test assumes continuous, approximately normal data.
//!
//! # Example
//!
//! ```
//! use hypotest::stats::hypothesis::{run_one_sample_t_test, Alternative};
//!
//! let sample = [10.2, 9.8, 10.4, 10.1, 9.9, 10.3];
//! let result = run_one_sample_t_test(&sample, 10.0, 0.05, Alternative::TwoSided)
//!     .expect("valid t-test inputs");
//! println!("t = {:.4}, p = {:.4}, power = {:.4}", result.statistic, result.p_value, result.power);
//! assert_eq!(result.significant, result.p_value < 0.05);
//! ```

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{HypotestError, Result};
use crate::stats::distribution::{PowerFunction, StatrsStudentT, StudentTCdf};
use crate::stats::power::NoncentralTPower;

/// Alternative hypothesis H₁ against H₀: μ = μ₀.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alternative {
    /// H₁: μ ≠ μ₀
    #[serde(alias = "2s")]
    TwoSided,
    /// H₁: μ < μ₀
    #[serde(alias = "smaller")]
    Less,
    /// H₁: μ > μ₀
    #[serde(alias = "larger")]
    Greater,
}

impl Alternative {
    /// All alternatives in reporting order.
    pub const ALL: [Alternative; 3] = [Self::TwoSided, Self::Less, Self::Greater];

    /// Canonical name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TwoSided => "two-sided",
            Self::Less => "less",
            Self::Greater => "greater",
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alternative {
    type Err = HypotestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two-sided" | "two_sided" | "2s" => Ok(Self::TwoSided),
            "less" | "smaller" => Ok(Self::Less),
            "greater" | "larger" => Ok(Self::Greater),
            other => Err(HypotestError::invalid(format!(
                "unknown alternative '{other}', expected two-sided, less or greater"
            ))),
        }
    }
}

/// Parameters of a test run: μ₀ and α.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestConfig {
    /// Hypothesized population mean μ₀.
    pub hypothesized_value: f64,
    /// Significance level α in (0, 1).
    pub significance_level: f64,
}

impl TestConfig {
    /// Validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::InvalidInput`] if `hypothesized_value` is not
    /// finite or `significance_level` is outside (0, 1).
    pub fn new(hypothesized_value: f64, significance_level: f64) -> Result<Self> {
        let config = Self {
            hypothesized_value,
            significance_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants of [`TestConfig::new`].
    ///
    /// # Errors
    ///
    /// See [`TestConfig::new`].
    pub fn validate(&self) -> Result<()> {
        if !self.hypothesized_value.is_finite() {
            return Err(HypotestError::invalid(format!(
                "hypothesized value must be finite, got {}",
                self.hypothesized_value
            )));
        }
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(HypotestError::invalid(format!(
                "significance level must be in (0, 1), got {}",
                self.significance_level
            )));
        }
        Ok(())
    }
}

/// Result of a plain one-sample t test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TTestResult {
    /// t-statistic
    pub statistic: f64,

    /// p-value (two-tailed)
    pub pvalue: f64,

    /// Degrees of freedom
    pub df: f64,
}

/// Quantities shared by every alternative for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreparedTest {
    /// Number of observations.
    pub n: usize,
    /// Sample mean ȳ.
    pub mean: f64,
    /// Sample standard deviation s (n − 1 denominator).
    pub std_dev: f64,
    /// μ₀ the sample was tested against.
    pub hypothesized_value: f64,
    /// t = (ȳ − μ₀) / (s / √n)
    pub statistic: f64,
    /// Degrees of freedom, n − 1.
    pub df: f64,
    /// Two-sided p-value of `statistic`.
    pub two_sided_pvalue: f64,
    /// Standardized effect size |μ₀ − ȳ| / s.
    pub effect_size: f64,
}

/// Outcome of the test against one alternative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestResult {
    /// Alternative this result answers.
    pub alternative: Alternative,
    /// t-statistic (identical for all alternatives of one sample).
    pub statistic: f64,
    /// p-value for `alternative`, in [0, 1].
    pub p_value: f64,
    /// Estimated power for `alternative`.
    pub power: f64,
    /// `p_value < significance_level`
    pub significant: bool,
}

/// All three alternatives evaluated on one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSet {
    /// Shared per-sample quantities.
    pub prepared: PreparedTest,
    /// α used for every scenario.
    pub significance_level: f64,
    /// Results in [`Alternative::ALL`] order.
    pub results: Vec<TestResult>,
}

impl ScenarioSet {
    /// Result for `alternative`, if evaluated.
    #[must_use]
    pub fn get(&self, alternative: Alternative) -> Option<&TestResult> {
        self.results.iter().find(|r| r.alternative == alternative)
    }
}

/// Two-sided confidence interval for the population mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Whether `value` lies inside the closed interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

/// One-sample t test with pluggable distribution providers.
#[derive(Debug, Clone)]
pub struct OneSampleTTest<D = StatrsStudentT, P = NoncentralTPower> {
    config: TestConfig,
    cdf: D,
    power: P,
}

impl OneSampleTTest {
    /// Test using the `statrs` t distribution and [`NoncentralTPower`].
    #[must_use]
    pub fn new(config: TestConfig) -> Self {
        Self::with_providers(config, StatrsStudentT, NoncentralTPower::default())
    }
}

impl<D: StudentTCdf, P: PowerFunction> OneSampleTTest<D, P> {
    /// Test using caller-supplied providers.
    pub fn with_providers(config: TestConfig, cdf: D, power: P) -> Self {
        Self { config, cdf, power }
    }

    #[must_use]
    pub fn config(&self) -> &TestConfig {
        &self.config
    }

    /// Computes the per-sample quantities: n, mean, s, t, two-sided p and d.
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::InvalidInput`] if the configuration is
    /// invalid, the sample has fewer than 2 values, contains non-finite
    /// values, or is constant.
    pub fn prepare(&self, sample: &[f64]) -> Result<PreparedTest> {
        self.config.validate()?;
        let mu = self.config.hypothesized_value;
        let base = one_sample_t(sample, mu, &self.cdf)?;

        let prepared = PreparedTest {
            n: base.n,
            mean: base.mean,
            std_dev: base.std_dev,
            hypothesized_value: mu,
            statistic: base.result.statistic,
            df: base.result.df,
            two_sided_pvalue: base.result.pvalue,
            effect_size: (mu - base.mean).abs() / base.std_dev,
        };
        debug!(
            n = prepared.n,
            mean = prepared.mean,
            std_dev = prepared.std_dev,
            statistic = prepared.statistic,
            pvalue = prepared.two_sided_pvalue,
            "prepared one-sample t test"
        );
        Ok(prepared)
    }

    /// Evaluates one alternative on prepared quantities.
    ///
    /// # Errors
    ///
    /// Propagates errors from the power provider.
    pub fn evaluate(&self, prepared: &PreparedTest, alternative: Alternative) -> Result<TestResult> {
        let alpha = self.config.significance_level;
        let p_value = one_sided_pvalue(
            prepared.two_sided_pvalue,
            prepared.hypothesized_value,
            prepared.mean,
            alternative,
        );
        let power = self
            .power
            .power(prepared.effect_size, prepared.n, alpha, alternative)?;

        let result = TestResult {
            alternative,
            statistic: prepared.statistic,
            p_value,
            power,
            significant: p_value < alpha,
        };
        debug!(%alternative, p_value, power, significant = result.significant, "evaluated alternative");
        Ok(result)
    }

    /// Runs the test against a single alternative.
    ///
    /// # Errors
    ///
    /// See [`OneSampleTTest::prepare`].
    pub fn test(&self, sample: &[f64], alternative: Alternative) -> Result<TestResult> {
        let prepared = self.prepare(sample)?;
        self.evaluate(&prepared, alternative)
    }

    /// Runs all three scenarios, sharing the statistic.
    ///
    /// # Errors
    ///
    /// See [`OneSampleTTest::prepare`].
    pub fn test_all(&self, sample: &[f64]) -> Result<ScenarioSet> {
        let prepared = self.prepare(sample)?;
        let results = Alternative::ALL
            .iter()
            .map(|&alternative| self.evaluate(&prepared, alternative))
            .collect::<Result<Vec<_>>>()?;
        Ok(ScenarioSet {
            prepared,
            significance_level: self.config.significance_level,
            results,
        })
    }

    /// Confidence interval for the mean at `1 − α`.
    ///
    /// # Errors
    ///
    /// See [`OneSampleTTest::prepare`].
    pub fn confidence_interval(&self, sample: &[f64]) -> Result<ConfidenceInterval> {
        interval_with(sample, 1.0 - self.config.significance_level, &self.cdf)
    }
}

/// Runs a one-sample t test against `alternative` with default providers.
///
/// # Errors
///
/// Returns [`HypotestError::InvalidInput`] when the sample has fewer than 2
/// values, contains non-finite values or is constant, or when
/// `significance_level` is outside (0, 1).
pub fn run_one_sample_t_test(
    sample: &[f64],
    hypothesized_value: f64,
    significance_level: f64,
    alternative: Alternative,
) -> Result<TestResult> {
    let config = TestConfig::new(hypothesized_value, significance_level)?;
    OneSampleTTest::new(config).test(sample, alternative)
}

/// One-sample t-test: Tests if sample mean differs from population mean.
///
/// H₀: μ = `population_mean`
/// H₁: μ ≠ `population_mean`
///
/// # Errors
///
/// Same sample requirements as [`run_one_sample_t_test`].
pub fn ttest_1samp(sample: &[f64], population_mean: f64) -> Result<TTestResult> {
    if !population_mean.is_finite() {
        return Err(HypotestError::invalid(format!(
            "population mean must be finite, got {population_mean}"
        )));
    }
    Ok(one_sample_t(sample, population_mean, &StatrsStudentT)?.result)
}

/// Two-sided t confidence interval for the mean: ȳ ± t₁₋α/₂ · s/√n.
///
/// # Errors
///
/// Returns [`HypotestError::InvalidInput`] for `confidence_level` outside
/// (0, 1) or an invalid sample.
pub fn confidence_interval(sample: &[f64], confidence_level: f64) -> Result<ConfidenceInterval> {
    interval_with(sample, confidence_level, &StatrsStudentT)
}

fn interval_with<D: StudentTCdf>(
    sample: &[f64],
    confidence_level: f64,
    cdf: &D,
) -> Result<ConfidenceInterval> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(HypotestError::invalid(format!(
            "confidence level must be in (0, 1), got {confidence_level}"
        )));
    }
    let (mean, std_dev) = moments(sample)?;
    let n = sample.len() as f64;
    let critical = cdf.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0, n - 1.0)?;
    let margin = critical * std_dev / n.sqrt();
    Ok(ConfidenceInterval {
        lower: mean - margin,
        upper: mean + margin,
        confidence_level,
    })
}

/// Derives the p-value for `alternative` from the two-sided p-value by
/// checking which side of μ₀ the sample mean falls on.
#[must_use]
pub fn one_sided_pvalue(
    two_sided: f64,
    hypothesized_value: f64,
    mean: f64,
    alternative: Alternative,
) -> f64 {
    let half = two_sided / 2.0;
    let p = match alternative {
        Alternative::TwoSided => two_sided,
        Alternative::Less => {
            if hypothesized_value < mean {
                1.0 - half
            } else {
                half
            }
        }
        Alternative::Greater => {
            if hypothesized_value < mean {
                half
            } else {
                1.0 - half
            }
        }
    };
    p.clamp(0.0, 1.0)
}

struct OneSampleT {
    n: usize,
    mean: f64,
    std_dev: f64,
    result: TTestResult,
}

fn one_sample_t<D: StudentTCdf>(sample: &[f64], population_mean: f64, cdf: &D) -> Result<OneSampleT> {
    let (mean, std_dev) = moments(sample)?;
    let n = sample.len();

    // t = (x̄ - μ₀) / (s / √n)
    let se = std_dev / (n as f64).sqrt();
    let statistic = (mean - population_mean) / se;
    let df = (n - 1) as f64;

    let pvalue = (2.0 * (1.0 - cdf.cdf(statistic.abs(), df)?)).clamp(0.0, 1.0);

    Ok(OneSampleT {
        n,
        mean,
        std_dev,
        result: TTestResult {
            statistic,
            pvalue,
            df,
        },
    })
}

/// Mean and sample standard deviation of a validated sample.
fn moments(sample: &[f64]) -> Result<(f64, f64)> {
    if sample.len() < 2 {
        return Err(HypotestError::invalid(format!(
            "t-test requires at least 2 observations, got {}",
            sample.len()
        )));
    }
    if let Some(bad) = sample.iter().find(|x| !x.is_finite()) {
        return Err(HypotestError::invalid(format!(
            "sample contains non-finite value {bad}"
        )));
    }
    if sample.iter().all(|&x| x == sample[0]) {
        return Err(HypotestError::invalid(
            "sample is constant; standard deviation is zero",
        ));
    }

    let mean = sample.iter().mean();
    let std_dev = sample.iter().std_dev();
    if !(std_dev > 0.0) || !std_dev.is_finite() {
        return Err(HypotestError::invalid(format!(
            "standard deviation must be positive and finite, got {std_dev}"
        )));
    }
    Ok((mean, std_dev))
}

#[cfg(test)]
#[path = "hypothesis_tests.rs"]
mod tests;
