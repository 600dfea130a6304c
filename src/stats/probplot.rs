//! Normal probability plot coordinates.
//!
//! Pairs each ordered observation (`osr`) with the normal quantile of the
//! median of the matching uniform order statistic (`osm`, Filliben 1975) and
//! fits a least-squares line through the points. Points close to the line
//! (r near 1) indicate approximately normal data.
//!
//! Only the coordinates and fit are produced; drawing them is left to the
//! caller.

use serde::Serialize;
use statrs::distribution::ContinuousCDF;

use crate::error::{HypotestError, Result};
use crate::stats::distribution::standard_normal;

/// Coordinates and least-squares fit of a normal probability plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityPlot {
    /// Theoretical quantiles (x axis).
    pub osm: Vec<f64>,
    /// Ordered sample values (y axis).
    pub osr: Vec<f64>,
    pub slope: f64,
    pub intercept: f64,
    /// Correlation coefficient of the fit.
    pub r: f64,
}

impl ProbabilityPlot {
    /// Fitted value at theoretical quantile `x`.
    #[must_use]
    pub fn fitted(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Medians of the `n` uniform order statistics (Filliben's estimate).
#[must_use]
pub fn order_statistic_medians(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.5],
        _ => {
            let last = 0.5_f64.powf(1.0 / n as f64);
            let mut medians = Vec::with_capacity(n);
            medians.push(1.0 - last);
            medians.extend((2..n).map(|i| (i as f64 - 0.3175) / (n as f64 + 0.365)));
            medians.push(last);
            medians
        }
    }
}

/// Builds normal probability plot coordinates for `sample`.
///
/// # Errors
///
/// Returns [`HypotestError::InvalidInput`] for fewer than 2 values,
/// non-finite values or a constant sample.
pub fn normal_probability_plot(sample: &[f64]) -> Result<ProbabilityPlot> {
    let n = sample.len();
    if n < 2 {
        return Err(HypotestError::invalid(format!(
            "probability plot requires at least 2 observations, got {n}"
        )));
    }
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(HypotestError::invalid("sample contains non-finite values"));
    }

    let normal = standard_normal()?;
    let osm: Vec<f64> = order_statistic_medians(n)
        .into_iter()
        .map(|p| normal.inverse_cdf(p))
        .collect();
    let mut osr = sample.to_vec();
    osr.sort_by(f64::total_cmp);

    let (slope, intercept, r) = least_squares(&osm, &osr)?;
    Ok(ProbabilityPlot {
        osm,
        osr,
        slope,
        intercept,
        r,
    })
}

/// Simple linear regression of `y` on `x`: (slope, intercept, r).
fn least_squares(x: &[f64], y: &[f64]) -> Result<(f64, f64, f64)> {
    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    if syy == 0.0 {
        return Err(HypotestError::invalid(
            "sample is constant; probability plot fit is undefined",
        ));
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    let r = (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0);
    Ok((slope, intercept, r))
}
