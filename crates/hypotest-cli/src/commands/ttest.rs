//! One-sample t test command
//!
//! Reads a sample, prints its summaries and evaluates H₀: μ = μ₀ against
//! the selected alternatives.

use std::path::Path;
use std::str::FromStr;

use hypotest::config::AnalysisConfig;
use hypotest::report;
use hypotest::stats::{
    Alternative, ConfidenceInterval, NonparametricSummary, OneSampleTTest, ParametricSummary,
    ScenarioSet,
};
use serde::Serialize;
use tracing::info;

use crate::error::{CliError, Result};
use crate::{input, output};

/// Which alternatives to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selection {
    All,
    One(Alternative),
}

impl Selection {
    fn alternatives(self) -> Vec<Alternative> {
        match self {
            Self::All => Alternative::ALL.to_vec(),
            Self::One(alternative) => vec![alternative],
        }
    }
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Alternative>()
            .map(Self::One)
            .map_err(|e| e.to_string())
    }
}

/// Command-line overrides of the analysis configuration.
#[derive(Debug, Clone)]
pub(crate) struct TtestOptions {
    pub(crate) column: usize,
    pub(crate) mu: Option<f64>,
    pub(crate) alpha: Option<f64>,
    pub(crate) decimals: Option<u32>,
    pub(crate) alternative: Selection,
    pub(crate) summaries: bool,
}

impl TtestOptions {
    fn apply(&self, config: &mut AnalysisConfig) {
        if let Some(mu) = self.mu {
            config.hypothesized_value = mu;
        }
        if let Some(alpha) = self.alpha {
            config.significance_level = alpha;
        }
        if let Some(decimals) = self.decimals {
            config.decimals = decimals;
        }
    }
}

#[derive(Serialize)]
struct TtestReport<'a> {
    file: String,
    config: &'a AnalysisConfig,
    parametric: &'a ParametricSummary,
    nonparametric: &'a NonparametricSummary,
    confidence_interval: &'a ConfidenceInterval,
    scenarios: &'a ScenarioSet,
}

/// Run the ttest command
pub(crate) fn run(
    path: &Path,
    options: &TtestOptions,
    config_path: Option<&Path>,
    json_output: bool,
) -> Result<()> {
    let mut config = super::load_config(config_path)?;
    options.apply(&mut config);
    config.validate().map_err(CliError::Analysis)?;

    let sample = input::read_sample(path, options.column)?;
    info!(
        n = sample.len(),
        hypothesized_value = config.hypothesized_value,
        significance_level = config.significance_level,
        "running one-sample t test"
    );

    let test = OneSampleTTest::new(config.test_config());
    let prepared = test.prepare(sample.values())?;
    let results = options
        .alternative
        .alternatives()
        .into_iter()
        .map(|alternative| test.evaluate(&prepared, alternative))
        .collect::<hypotest::Result<Vec<_>>>()?;
    let scenarios = ScenarioSet {
        prepared,
        significance_level: config.significance_level,
        results,
    };
    let interval = test.confidence_interval(sample.values())?;
    let parametric = sample.parametric_summary()?;
    let nonparametric = sample.nonparametric_summary(config.alphap, config.betap)?;

    if json_output {
        return output::json(&TtestReport {
            file: path.display().to_string(),
            config: &config,
            parametric: &parametric,
            nonparametric: &nonparametric,
            confidence_interval: &interval,
            scenarios: &scenarios,
        });
    }

    let decimals = config.decimals;
    output::section("One-sample t test");
    output::kv("Data file", path.display());
    output::kv("Hypothesized value", config.hypothesized_value);
    output::kv("Significance level", config.significance_level);

    if options.summaries {
        output::section("Parametric statistics");
        output::block(&report::render_parametric(&parametric, decimals));
        output::section("Non-parametric statistics");
        output::block(&report::render_nonparametric(&nonparametric, decimals));
    }

    output::section("Confidence interval");
    output::kv(
        &format!("{:.0}% interval for the average", interval.confidence_level * 100.0),
        format!(
            "[{}, {}]",
            report::round_to(interval.lower, decimals),
            report::round_to(interval.upper, decimals)
        ),
    );

    for (i, result) in scenarios.results.iter().enumerate() {
        output::section(&format!("Scenario {}", i + 1));
        println!("{}", report::scenario_header(result.alternative));
        println!();
        output::significance(result);
        output::block(&report::result_table(result, decimals));
    }
    Ok(())
}
