//! Error types for loading and aggregating benchmark results.

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a results file or computing its geometric mean.
///
/// Line numbers are 1-based and refer to the source results file.
#[derive(Debug, Error)]
pub enum GmeanError {
    #[error("failed to read results file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: missing {field} value")]
    MissingValue { line: usize, field: &'static str },

    #[error("line {line}: invalid {field} value '{token}': {source}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("degenerate input: zero record count")]
    EmptyInput,

    #[error("degenerate input: baseline value is zero at line {line}")]
    ZeroBaseline { line: usize },

    #[error("degenerate input: {field} value is negative at line {line}")]
    NegativeValue { line: usize, field: &'static str },

    #[error("degenerate input: ratio {ratio} at line {line} is not a positive finite value")]
    NonPositiveRatio { line: usize, ratio: f64 },

    #[error("geometric mean of {count} records is not representable as a finite positive value")]
    ResultOutOfRange { count: usize },
}
