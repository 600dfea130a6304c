//! Reading a numeric column from a text file or stdin.
//!
//! One observation per line. Lines may carry several comma, tab or space
//! separated fields (standard CSV quoting applies); `column` selects which
//! one is used. A first line whose
//! field is not a number is taken as a header. Empty fields and the tokens
//! `NA`, `NaN`, `null` and `None` are missing values.

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

use hypotest::stats::Sample;
use tracing::debug;

use crate::error::{CliError, Result};

const MISSING_TOKENS: [&str; 4] = ["na", "nan", "null", "none"];

/// Reads `path` (or stdin for `-`) into a sample, dropping missing values.
pub(crate) fn read_sample(path: &Path, column: usize) -> Result<Sample> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        validate_path(path)?;
        std::fs::read_to_string(path)?
    };

    let observations = parse_column(&text, column)?;
    let total = observations.len();
    let sample = Sample::from_observations(observations)?;
    debug!(
        path = %path.display(),
        total,
        missing = total - sample.len(),
        "read sample"
    );
    Ok(sample)
}

fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CliError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Extracts field `column` of every data record; `None` marks a missing value.
pub(crate) fn parse_column(text: &str, column: usize) -> Result<Vec<Option<f64>>> {
    let (delimiter, body) = match sniff_delimiter(text) {
        Some(delimiter) => (delimiter, Cow::Borrowed(text)),
        None => (b'\t', Cow::Owned(tabulate_whitespace(text))),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(delimiter)
        .from_reader(body.as_bytes());

    let mut observations = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            let line = e.position().map_or(0, csv::Position::line);
            CliError::InvalidData(format!("line {line}: {e}"))
        })?;
        let line = record.position().map_or(0, csv::Position::line);
        let field = record.get(column).unwrap_or("");

        if is_missing(field) {
            observations.push(None);
            continue;
        }
        match field.parse::<f64>() {
            Ok(value) => observations.push(Some(value)),
            Err(_) if index == 0 => debug!(header = field, "skipping header line"),
            Err(_) => {
                return Err(CliError::InvalidData(format!(
                    "line {line}: '{field}' is not a number"
                )))
            }
        }
    }
    Ok(observations)
}

/// Comma when the first data line has one; `None` means whitespace.
fn sniff_delimiter(text: &str) -> Option<u8> {
    text.lines()
        .find(|line| !line.trim().is_empty())
        .filter(|line| line.contains(','))
        .map(|_| b',')
}

/// Rewrites runs of spaces as single tabs, keeping the line structure.
fn tabulate_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_missing(field: &str) -> bool {
    field.is_empty()
        || MISSING_TOKENS
            .iter()
            .any(|token| field.eq_ignore_ascii_case(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_column() {
        let values = parse_column("1\n2.5\n-3\n", 0).expect("valid data");
        assert_eq!(values, vec![Some(1.0), Some(2.5), Some(-3.0)]);
    }

    #[test]
    fn test_header_is_skipped() {
        let values = parse_column("y\n1\n2\n", 0).expect("valid data");
        assert_eq!(values, vec![Some(1.0), Some(2.0)]);
    }

    #[test]
    fn test_missing_tokens() {
        let values = parse_column("1\nNA\nnan\n\nnull\n4", 0).expect("valid data");
        assert_eq!(values, vec![Some(1.0), None, None, None, Some(4.0)]);
    }

    #[test]
    fn test_comma_columns() {
        let text = "id,y\n1,211\n2,\n3,572\n";
        assert_eq!(
            parse_column(text, 1).expect("valid data"),
            vec![Some(211.0), None, Some(572.0)]
        );
        assert_eq!(
            parse_column(text, 0).expect("valid data"),
            vec![Some(1.0), Some(2.0), Some(3.0)]
        );
    }

    #[test]
    fn test_whitespace_columns() {
        let values = parse_column("1 \t 10\n2   20\n", 1).expect("valid data");
        assert_eq!(values, vec![Some(10.0), Some(20.0)]);
    }

    #[test]
    fn test_missing_column_is_missing_value() {
        let values = parse_column("1,2\n3\n", 1).expect("valid data");
        assert_eq!(values, vec![Some(2.0), None]);
    }

    #[test]
    fn test_bad_value_after_header() {
        let err = parse_column("y\n1\nabc\n", 0).expect_err("abc is not a number");
        assert!(matches!(err, CliError::InvalidData(_)));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_quoted_csv() {
        let text = "\"id\",\"y\"\n\"1\",\"211\"\n\"2\",\"572\"\n\"3\",\"558\"\n";
        assert_eq!(
            parse_column(text, 1).expect("valid data"),
            vec![Some(211.0), Some(572.0), Some(558.0)]
        );
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let text = "name,y\n\"Smith, J\",4.5\n\"Doe, A\",NA\n";
        assert_eq!(
            parse_column(text, 1).expect("valid data"),
            vec![Some(4.5), None]
        );
    }

    #[test]
    fn test_tab_columns() {
        let values = parse_column("a\tb\n1\t\n2\t3\n", 1).expect("valid data");
        assert_eq!(values, vec![None, Some(3.0)]);
    }

    #[test]
    fn test_read_sample_from_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "y\n1\nNA\n3\n").expect("write data");
        let sample = read_sample(&path, 0).expect("valid file");
        assert_eq!(sample.values(), &[1.0, 3.0]);
    }

    #[test]
    fn test_read_sample_missing_file() {
        let err = read_sample(Path::new("/nonexistent/data.csv"), 0).expect_err("missing");
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_read_sample_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = read_sample(dir.path(), 0).expect_err("directory");
        assert!(matches!(err, CliError::NotAFile(_)));
    }
}
