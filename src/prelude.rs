//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use hypotest::prelude::*;
//! ```

pub use crate::config::AnalysisConfig;
pub use crate::error::{HypotestError, Result};
pub use crate::stats::{
    confidence_interval, normal_probability_plot, run_one_sample_t_test, ttest_1samp,
    Alternative, NoncentralTPower, OneSampleTTest, PowerFunction, Sample, ScenarioSet,
    StatrsStudentT, StudentTCdf, TestConfig, TestResult,
};
