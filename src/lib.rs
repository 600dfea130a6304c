//! hypotest: one-sample hypothesis testing in Rust.
//!
//! Compares a sample mean against a hypothesized population value with a
//! one-sample t test, under each of the three alternative hypotheses, and
//! estimates the power of each test.
//!
//! # Quick Start
//!
//! ```
//! use hypotest::prelude::*;
//!
//! let sample = [211.0, 572.0, 558.0, 250.0, 478.0, 307.0, 184.0, 435.0, 460.0, 308.0];
//! let test = OneSampleTTest::new(TestConfig::new(400.0, 0.05).unwrap());
//! let scenarios = test.test_all(&sample).unwrap();
//!
//! for result in &scenarios.results {
//!     assert_eq!(result.statistic, scenarios.prepared.statistic);
//!     assert_eq!(result.significant, result.p_value < 0.05);
//! }
//! ```
//!
//! # Modules
//!
//! - [`stats`]: samples, summaries, the t test, power and probability plots
//! - [`report`]: plain-text formatting of results
//! - [`config`]: analysis configuration record
//! - [`error`]: error type

pub mod config;
pub mod error;
pub mod prelude;
pub mod report;
pub mod stats;

pub use error::{HypotestError, Result};
