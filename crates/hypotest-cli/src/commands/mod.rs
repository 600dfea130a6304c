//! Command implementations

pub(crate) mod describe;
pub(crate) mod probplot;
pub(crate) mod ttest;

use std::path::Path;

use hypotest::config::AnalysisConfig;

use crate::error::{CliError, Result};

/// Loads the config file if given, otherwise the defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => AnalysisConfig::load(path).map_err(CliError::Config),
        None => Ok(AnalysisConfig::default()),
    }
}
