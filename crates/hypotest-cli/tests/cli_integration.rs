//! CLI Integration Tests for htest

#![allow(clippy::unwrap_used)] // Tests can use unwrap

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

// ============================================================================
// Helper Functions
// ============================================================================

const SAMPLE: [u32; 25] = [
    211, 572, 558, 250, 478, 307, 184, 435, 460, 308, 188, 111, 676, 326, 142, 255, 205, 77, 190,
    320, 407, 333, 488, 374, 409,
];

/// Create an htest command
fn htest() -> Command {
    Command::cargo_bin("htest").expect("Failed to find htest binary")
}

/// Write the reference sample as a single-column file with a header
fn sample_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "y").unwrap();
    for value in SAMPLE {
        writeln!(file, "{value}").unwrap();
    }
    file
}

fn json_output(args: &[&str]) -> serde_json::Value {
    let output = htest().args(args).output().unwrap();
    assert!(output.status.success(), "{output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// ttest
// ============================================================================

#[test]
fn test_ttest_reports_three_scenarios() {
    let file = sample_file();
    htest()
        .args(["ttest", file.path().to_str().unwrap(), "--mu", "400"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scenario 1"))
        .stdout(predicate::str::contains("Scenario 2"))
        .stdout(predicate::str::contains("Scenario 3"))
        .stdout(predicate::str::contains("Parametric statistics"))
        .stdout(predicate::str::contains("test statistic"))
        .stdout(predicate::str::contains("-2.252"));
}

#[test]
fn test_ttest_json_shares_statistic() {
    let file = sample_file();
    let json = json_output(&["ttest", file.path().to_str().unwrap(), "--json"]);

    let results = json["scenarios"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    let statistic = json["scenarios"]["prepared"]["statistic"].as_f64().unwrap();
    for r in results {
        assert_eq!(r["statistic"].as_f64().unwrap(), statistic);
        let p = r["p_value"].as_f64().unwrap();
        assert_eq!(r["significant"].as_bool().unwrap(), p < 0.05);
    }
    assert_eq!(results[0]["alternative"], "two-sided");
    assert_eq!(json["config"]["hypothesized_value"].as_f64().unwrap(), 400.0);
}

#[test]
fn test_ttest_single_alternative() {
    let file = sample_file();
    let json = json_output(&[
        "ttest",
        file.path().to_str().unwrap(),
        "--alternative",
        "less",
        "--json",
    ]);
    let results = json["scenarios"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["alternative"], "less");
    assert_eq!(results[0]["significant"], true);
}

#[test]
fn test_ttest_reads_stdin() {
    htest()
        .args(["ttest", "-", "--mu", "2", "--no-summary"])
        .write_stdin("1\n2\n3\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("not statistically significant"))
        .stdout(predicate::str::contains("Parametric statistics").not());
}

#[test]
fn test_ttest_uses_config_file() {
    let file = sample_file();
    let mut config = NamedTempFile::new().unwrap();
    write!(config, r#"{{"hypothesized_value": 330.56, "decimals": 2}}"#).unwrap();

    let json = json_output(&[
        "ttest",
        file.path().to_str().unwrap(),
        "--config",
        config.path().to_str().unwrap(),
        "--json",
    ]);
    let statistic = json["scenarios"]["prepared"]["statistic"].as_f64().unwrap();
    assert!(statistic.abs() < 1e-9);
    assert_eq!(json["config"]["decimals"], 2);
}

#[test]
fn test_ttest_flag_overrides_config() {
    let file = sample_file();
    let mut config = NamedTempFile::new().unwrap();
    write!(config, r#"{{"hypothesized_value": 1.0}}"#).unwrap();

    let json = json_output(&[
        "ttest",
        file.path().to_str().unwrap(),
        "--config",
        config.path().to_str().unwrap(),
        "--mu",
        "400",
        "--json",
    ]);
    assert_eq!(json["config"]["hypothesized_value"].as_f64().unwrap(), 400.0);
}

#[test]
fn test_ttest_reads_quoted_csv_column() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "\"id\",\"y\"").unwrap();
    for (i, value) in SAMPLE.iter().enumerate() {
        writeln!(file, "\"{}\",\"{value}\"", i + 1).unwrap();
    }
    let json = json_output(&[
        "ttest",
        file.path().to_str().unwrap(),
        "--column",
        "1",
        "--json",
    ]);
    assert_eq!(json["scenarios"]["prepared"]["n"], 25);
    assert!((json["parametric"]["mean"].as_f64().unwrap() - 330.56).abs() < 1e-9);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_ttest_missing_file() {
    htest()
        .args(["ttest", "/nonexistent/data.csv"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_ttest_constant_sample() {
    htest()
        .args(["ttest", "-"])
        .write_stdin("5\n5\n5\n")
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("constant"));
}

#[test]
fn test_ttest_single_observation() {
    htest()
        .args(["ttest", "-"])
        .write_stdin("y\n5\nNA\n")
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("at least 2"));
}

#[test]
fn test_ttest_bad_alpha() {
    let file = sample_file();
    htest()
        .args(["ttest", file.path().to_str().unwrap(), "--alpha", "1.5"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("significance level"));
}

#[test]
fn test_ttest_malformed_data() {
    htest()
        .args(["ttest", "-"])
        .write_stdin("1\n2\nthree\n")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_ttest_bad_config() {
    let file = sample_file();
    let mut config = NamedTempFile::new().unwrap();
    write!(config, "not json").unwrap();
    htest()
        .args([
            "ttest",
            file.path().to_str().unwrap(),
            "--config",
            config.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(6);
}

// ============================================================================
// describe / probplot
// ============================================================================

#[test]
fn test_describe_json() {
    let file = sample_file();
    let json = json_output(&["describe", file.path().to_str().unwrap(), "--json"]);
    assert_eq!(json["parametric"]["n"], 25);
    assert!((json["parametric"]["mean"].as_f64().unwrap() - 330.56).abs() < 1e-9);
    assert_eq!(json["nonparametric"]["median"].as_f64().unwrap(), 320.0);
}

#[test]
fn test_describe_text() {
    let file = sample_file();
    htest()
        .args(["describe", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Non-parametric statistics"))
        .stdout(predicate::str::contains("median"));
}

#[test]
fn test_probplot_json() {
    let file = sample_file();
    let json = json_output(&["probplot", file.path().to_str().unwrap(), "--json"]);
    assert_eq!(json["osm"].as_array().unwrap().len(), 25);
    assert_eq!(json["osr"][0].as_f64().unwrap(), 77.0);
    let r = json["r"].as_f64().unwrap();
    assert!(r > 0.9 && r <= 1.0);
}

#[test]
fn test_probplot_text() {
    htest()
        .args(["probplot", "-", "--decimals", "2"])
        .write_stdin("1\n2\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("slope"))
        .stdout(predicate::str::contains("intercept"));
}

#[test]
fn test_probplot_rejects_too_many_decimals() {
    let file = sample_file();
    for decimals in ["16", "400", "4000000000"] {
        htest()
            .args(["probplot", file.path().to_str().unwrap(), "--decimals", decimals])
            .assert()
            .failure()
            .code(5)
            .stderr(predicate::str::contains("decimals must be at most 15"));
    }
}

#[test]
fn test_probplot_decimals_from_config_are_validated() {
    let file = sample_file();
    let mut config = NamedTempFile::new().unwrap();
    write!(config, r#"{{"decimals": 40}}"#).unwrap();
    htest()
        .args([
            "probplot",
            file.path().to_str().unwrap(),
            "--config",
            config.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(6);
}

#[test]
fn test_log_output_has_no_ansi_codes_when_piped() {
    htest()
        .args(["probplot", "-", "--verbose"])
        .write_stdin("1\n2\n3\n10\n40\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("\u{1b}[").not());
}
