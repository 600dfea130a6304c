//! Probplot command: normal probability plot coordinates and fit.

use std::path::Path;

use hypotest::report::{round_to, table};
use hypotest::stats::normal_probability_plot;
use tracing::{info, warn};

use crate::error::{CliError, Result};
use crate::{input, output};

/// Correlation below which the sample is flagged as visibly non-normal.
const LOW_CORRELATION: f64 = 0.95;

/// Run the probplot command
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
    let decimals = config.decimals;

    let sample = input::read_sample(path, column)?;
    let plot = normal_probability_plot(sample.values())?;
    info!(n = sample.len(), r = plot.r, "computed probability plot");
    if plot.r < LOW_CORRELATION {
        warn!(r = plot.r, "probability plot departs from a straight line");
    }

    if json_output {
        return output::json(&plot);
    }

    output::section("Normal probability plot");
    output::block(&table(
        &[
            ("slope", plot.slope),
            ("intercept", plot.intercept),
            ("r", plot.r),
        ],
        decimals,
    ));

    output::section("Theoretical quantiles (osm) vs ordered values (osr)");
    for (osm, osr) in plot.osm.iter().zip(&plot.osr) {
        println!(
            "  {:>12} {:>12}",
            round_to(*osm, decimals),
            round_to(*osr, decimals)
        );
    }
    Ok(())
}
