//! Output formatting utilities

use colored::Colorize;
use hypotest::report;
use hypotest::stats::TestResult;

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Print a pre-formatted table, indented
pub(crate) fn block(text: &str) {
    for line in text.lines() {
        println!("  {line}");
    }
}

/// Print the significance announcement for a result
pub(crate) fn significance(result: &TestResult) {
    let label = report::significance_label(result);
    if result.significant {
        println!("{}", label.green().bold());
    } else {
        println!("{}", label.yellow());
    }
}

/// Print an error message
pub(crate) fn error(msg: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), msg);
}

/// Print a value as pretty JSON
pub(crate) fn json<T: serde::Serialize>(value: &T) -> crate::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
