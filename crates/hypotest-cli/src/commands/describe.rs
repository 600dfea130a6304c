//! Describe command: parametric and non-parametric summaries of a sample.

use std::path::Path;

use hypotest::report;
use hypotest::stats::{NonparametricSummary, ParametricSummary};
use serde::Serialize;
use tracing::info;

use crate::error::{CliError, Result};
use crate::{input, output};

#[derive(Serialize)]
struct DescribeReport {
    file: String,
    parametric: ParametricSummary,
    nonparametric: NonparametricSummary,
}

/// Run the describe command
pub(crate) fn run(
    path: &Path,
    column: usize,
    decimals: Option<u32>,
    config_path: Option<&Path>,
    json_output: bool,
) -> Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(decimals) = decimals {
        config.decimals = decimals;
    }
    config.validate().map_err(CliError::Analysis)?;

    let sample = input::read_sample(path, column)?;
    info!(n = sample.len(), "describing sample");

    let report = DescribeReport {
        file: path.display().to_string(),
        parametric: sample.parametric_summary()?,
        nonparametric: sample.nonparametric_summary(config.alphap, config.betap)?,
    };

    if json_output {
        return output::json(&report);
    }

    output::section(&format!("Sample: {}", report.file));
    output::section("Parametric statistics");
    output::block(&report::render_parametric(&report.parametric, config.decimals));
    output::section("Non-parametric statistics");
    output::block(&report::render_nonparametric(
        &report.nonparametric,
        config.decimals,
    ));
    Ok(())
}
