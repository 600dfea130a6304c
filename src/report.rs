//! Plain-text presentation of test results and summaries.
//!
//! Nothing here computes statistics; every function formats values that the
//! [`stats`](crate::stats) module already produced.

use crate::stats::{
    Alternative, NonparametricSummary, ParametricSummary, ScenarioSet, TestResult,
};

/// Statement of H₀, shared by every scenario.
pub const NULL_HYPOTHESIS: &str =
    "Ho: 𝜇 = specified value. The population average equals the specified value.";

/// Most decimal places a report prints; larger requests are clamped.
pub const MAX_DECIMALS: u32 = 15;

/// Rounds `value` to `decimals` places (half away from zero), at most
/// [`MAX_DECIMALS`].
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10_f64.powi(decimals.min(MAX_DECIMALS) as i32);
    (value * scale).round() / scale
}

/// Statement of H₁ for `alternative`.
#[must_use]
pub fn alternative_hypothesis(alternative: Alternative) -> &'static str {
    match alternative {
        Alternative::TwoSided => {
            "Ha: 𝜇 ≠ specified value. The population average does not equal the specified value."
        }
        Alternative::Less => {
            "Ha: 𝜇 < specified value. The population average is less than the specified value."
        }
        Alternative::Greater => {
            "Ha: 𝜇 > specified value. The population average is greater than the specified value."
        }
    }
}

/// H₀ and H₁ lines for `alternative`.
#[must_use]
pub fn scenario_header(alternative: Alternative) -> String {
    format!("{NULL_HYPOTHESIS}\n{}", alternative_hypothesis(alternative))
}

/// "statistically significant" or "not statistically significant".
#[must_use]
pub fn significance_label(result: &TestResult) -> &'static str {
    if result.significant {
        "statistically significant"
    } else {
        "not statistically significant"
    }
}

/// Two-column table: labels left-aligned, values right-aligned and rounded.
#[must_use]
pub fn table(rows: &[(&str, f64)], decimals: u32) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    let cells: Vec<String> = rows
        .iter()
        .map(|&(_, value)| format!("{:.*}", decimals as usize, round_to(value, decimals)))
        .collect();
    let value_width = cells.iter().map(String::len).max().unwrap_or(0);

    rows.iter()
        .zip(&cells)
        .map(|((label, _), cell)| {
            let pad = label_width - label.chars().count();
            format!("{label}{:pad$}   {cell:>value_width$}\n", "")
        })
        .collect()
}

/// Test statistic, p-value and power of one result.
#[must_use]
pub fn result_table(result: &TestResult, decimals: u32) -> String {
    table(
        &[
            ("test statistic", result.statistic),
            ("p value", result.p_value),
            ("power", result.power),
        ],
        decimals,
    )
}

/// Full report of the three scenarios.
#[must_use]
pub fn render_scenarios(set: &ScenarioSet, decimals: u32) -> String {
    set.results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            format!(
                "Scenario {}\n\n{}\n\n{}\n{}\n",
                i + 1,
                scenario_header(result.alternative),
                significance_label(result),
                result_table(result, decimals)
            )
        })
        .collect()
}

/// Rows of a [`ParametricSummary`].
#[must_use]
pub fn render_parametric(summary: &ParametricSummary, decimals: u32) -> String {
    table(
        &[
            ("n", summary.n as f64),
            ("min", summary.min),
            ("max", summary.max),
            ("average", summary.mean),
            ("standard deviation", summary.std_dev),
            ("variance", summary.variance),
            ("standard error", summary.standard_error),
            ("lower 95% CI", summary.ci_lower),
            ("upper 95% CI", summary.ci_upper),
        ],
        decimals,
    )
}

/// Rows of a [`NonparametricSummary`].
#[must_use]
pub fn render_nonparametric(summary: &NonparametricSummary, decimals: u32) -> String {
    table(
        &[
            ("n", summary.n as f64),
            ("min", summary.min),
            ("q1", summary.q1),
            ("median", summary.median),
            ("q3", summary.q3),
            ("max", summary.max),
            ("iqr", summary.iqr),
            ("lower outer fence", summary.lower_outer_fence),
            ("lower inner fence", summary.lower_inner_fence),
            ("upper inner fence", summary.upper_inner_fence),
            ("upper outer fence", summary.upper_outer_fence),
        ],
        decimals,
    )
}
