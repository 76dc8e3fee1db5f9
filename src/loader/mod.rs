//! Results file loading.
//!
//! This module reads a whitespace-separated results file and turns each
//! non-blank line into a [`Record`].

use crate::error::GmeanError;
use crate::models::Record;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load every record from a results file.
pub fn load_records(path: &Path) -> Result<Vec<Record>, GmeanError> {
    info!("Reading results from: {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| GmeanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(&content)?;
    info!("Loaded {} records", records.len());

    Ok(records)
}

/// Parse the full text of a results file.
///
/// Blank and whitespace-only lines are skipped, so a trailing newline (or
/// its absence) makes no difference.
pub fn parse_records(content: &str) -> Result<Vec<Record>, GmeanError> {
    let mut records = Vec::new();

    for (idx, raw) in content.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_record(idx + 1, line)?;
        debug!("{}", record);
        records.push(record);
    }

    Ok(records)
}

/// Parse a single line into a record. Tokens past the second are ignored.
pub fn parse_record(line_no: usize, line: &str) -> Result<Record, GmeanError> {
    let mut tokens = line.split_whitespace();

    let baseline = parse_value(line_no, "baseline", tokens.next())?;
    let comparison = parse_value(line_no, "comparison", tokens.next())?;

    Ok(Record::new(line_no, baseline, comparison))
}

fn parse_value(line: usize, field: &'static str, token: Option<&str>) -> Result<f64, GmeanError> {
    let token = token.ok_or(GmeanError::MissingValue { line, field })?;

    token
        .parse::<f64>()
        .map_err(|source| GmeanError::InvalidNumber {
            line,
            field,
            token: token.to_string(),
            source,
        })
}
