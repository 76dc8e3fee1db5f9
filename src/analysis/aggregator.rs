//! Ratio aggregation.
//!
//! Folds per-benchmark records into a running product of
//! comparison/baseline ratios and takes its N-th root.

use crate::error::GmeanError;
use crate::models::{GeometricMean, Record};
use tracing::{debug, warn};

/// Powers of two the running product is kept within, as `2^-SCALE_BITS..=2^SCALE_BITS`.
const SCALE_BITS: i32 = 256;

/// Running product held as `mantissa * 2^exponent`.
///
/// Rescaling by powers of two is exact, so the product of any number of
/// finite positive ratios stays representable until the final root.
#[derive(Debug, Clone, Copy)]
struct ScaledProduct {
    mantissa: f64,
    exponent: i64,
}

impl ScaledProduct {
    fn new() -> Self {
        Self {
            mantissa: 1.0,
            exponent: 0,
        }
    }

    fn mul(&mut self, ratio: f64) {
        let (ratio, shift) = rescale(ratio);
        let (mantissa, carry) = rescale(self.mantissa * ratio);
        self.mantissa = mantissa;
        self.exponent += shift + carry;
    }

    /// `(mantissa * 2^exponent)^(1/n)`
    fn root(&self, n: usize) -> f64 {
        let n = n as f64;
        self.mantissa.powf(1.0 / n) * 2f64.powf(self.exponent as f64 / n)
    }
}

/// Bring a finite positive value into `2^-SCALE_BITS..=2^SCALE_BITS`,
/// returning it with the power of two that was factored out.
fn rescale(mut value: f64) -> (f64, i64) {
    let hi = 2f64.powi(SCALE_BITS);
    let lo = 2f64.powi(-SCALE_BITS);
    let mut shift = 0i64;

    while value > hi {
        value *= lo;
        shift += SCALE_BITS as i64;
    }
    while value < lo {
        value *= hi;
        shift -= SCALE_BITS as i64;
    }

    (value, shift)
}

/// Compute the geometric mean of `comparison / baseline` over all records.
///
/// Records are folded in input order. Inputs for which the geometric mean is
/// undefined (no records, a zero baseline, a negative metric, a zero ratio)
/// are rejected instead of producing `inf` or `NaN`.
pub fn compute_geometric_mean(records: &[Record]) -> Result<GeometricMean, GmeanError> {
    if records.is_empty() {
        warn!("No records to aggregate");
        return Err(GmeanError::EmptyInput);
    }

    let mut product = ScaledProduct::new();

    for record in records {
        product.mul(checked_ratio(record)?);
    }

    let count = records.len();
    let value = product.root(count);
    debug!(
        "product={}*2^{} count={} gmean={}",
        product.mantissa, product.exponent, count, value
    );

    if !value.is_finite() || value == 0.0 {
        return Err(GmeanError::ResultOutOfRange { count });
    }

    Ok(GeometricMean { value, count })
}

/// Ratio of a single record, validated for use in a geometric mean.
fn checked_ratio(record: &Record) -> Result<f64, GmeanError> {
    if record.baseline == 0.0 {
        return Err(GmeanError::ZeroBaseline { line: record.line });
    }
    if record.baseline < 0.0 {
        return Err(GmeanError::NegativeValue {
            line: record.line,
            field: "baseline",
        });
    }
    if record.comparison < 0.0 {
        return Err(GmeanError::NegativeValue {
            line: record.line,
            field: "comparison",
        });
    }

    let ratio = record.ratio();
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(GmeanError::NonPositiveRatio {
            line: record.line,
            ratio,
        });
    }

    Ok(ratio)
}
