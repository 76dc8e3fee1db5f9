//! Result line generation.

use crate::models::GeometricMean;
use std::io::Write;

/// Generate the single output line for a geometric mean.
pub fn format_gmean(gmean: &GeometricMean) -> String {
    format!("gmean = {}", gmean.value)
}

/// Write the result line to the given writer.
pub fn write_gmean<W: Write>(out: &mut W, gmean: &GeometricMean) -> std::io::Result<()> {
    writeln!(out, "{}", format_gmean(gmean))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_gmean() {
        let gm = GeometricMean {
            value: 1.0512,
            count: 8,
        };
        assert_eq!(format_gmean(&gm), "gmean = 1.0512");
    }

    #[test]
    fn test_write_gmean_is_one_line() {
        let gm = GeometricMean {
            value: 4.0,
            count: 2,
        };
        let mut out = Vec::new();
        write_gmean(&mut out, &gm).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "gmean = 4\n");
        assert_eq!(text.lines().count(), 1);
    }
}
