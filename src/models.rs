//! Data models for benchmark result analysis.
//!
//! A results file is a list of per-benchmark records, each pairing a
//! baseline metric (e.g. LRU IPC) with a comparison metric (e.g. the
//! contestant policy's IPC).

use std::fmt;

/// One line of a results file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Line number in the source file (1-indexed).
    pub line: usize,
    /// Baseline metric (first column).
    pub baseline: f64,
    /// Comparison metric (second column).
    pub comparison: f64,
}

impl Record {
    /// Creates a new record.
    pub fn new(line: usize, baseline: f64, comparison: f64) -> Self {
        Self {
            line,
            baseline,
            comparison,
        }
    }

    /// Returns comparison / baseline.
    pub fn ratio(&self) -> f64 {
        self.comparison / self.baseline
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: baseline={} comparison={}",
            self.line, self.baseline, self.comparison
        )
    }
}

/// Geometric mean of the per-record ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricMean {
    /// The N-th root of the ratio product.
    pub value: f64,
    /// Number of records folded into the product.
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ratio() {
        let record = Record::new(1, 2.0, 3.0);
        assert_eq!(record.ratio(), 1.5);

        let record = Record::new(2, 4.0, 1.0);
        assert_eq!(record.ratio(), 0.25);
    }

    #[test]
    fn test_record_display() {
        let record = Record::new(4, 0.5, 0.75);
        assert_eq!(record.to_string(), "line 4: baseline=0.5 comparison=0.75");
    }
}
