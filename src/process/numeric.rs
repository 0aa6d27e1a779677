//! Numeric coercion shared by aggregation and ranking.
//!
//! Sheet cells are free text. Anything that does not start with a number
//! counts as zero so a stray note never breaks the totals.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("numeric prefix pattern should compile")
});

/// What a metric cell holds once coerced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    /// Empty or whitespace only.
    Blank,
    /// The whole cell is a finite number.
    Number(f64),
    /// Non-empty text that is not entirely numeric. `coerced` is what it
    /// contributes to sums and sort keys.
    Invalid { coerced: f64 },
}

/// Parse a cell the way the sheet's consumers always have: leading
/// whitespace is skipped, the longest numeric prefix wins, and anything
/// else (including non-finite results) is `0.0`.
pub fn parse_numeric(cell: &str) -> f64 {
    let prefix = numeric_prefix(cell.trim_start());
    if prefix.is_empty() {
        return 0.0;
    }
    match prefix.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

pub fn classify(cell: &str) -> CellValue {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return CellValue::Blank;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && numeric_prefix(trimmed).len() == trimmed.len() => {
            CellValue::Number(v)
        }
        _ => CellValue::Invalid {
            coerced: parse_numeric(cell),
        },
    }
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][(e|E)[+-]digits]`.
fn numeric_prefix(s: &str) -> &str {
    NUMERIC_PREFIX.find(s).map_or("", |m| m.as_str())
}

/// Render a computed value without a trailing `.0` when it is integral.
pub fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(parse_numeric("12"), 12.0);
        assert_eq!(parse_numeric("-3.5"), -3.5);
        assert_eq!(parse_numeric(".5"), 0.5);
        assert_eq!(parse_numeric("7."), 7.0);
        assert_eq!(parse_numeric("1e3"), 1000.0);
        assert_eq!(parse_numeric("  42"), 42.0);
    }

    #[test]
    fn failures_coerce_to_zero() {
        assert_eq!(parse_numeric(""), 0.0);
        assert_eq!(parse_numeric("   "), 0.0);
        assert_eq!(parse_numeric("n/a"), 0.0);
        assert_eq!(parse_numeric("-"), 0.0);
        assert_eq!(parse_numeric("."), 0.0);
        assert_eq!(parse_numeric("NaN"), 0.0);
        assert_eq!(parse_numeric("inf"), 0.0);
        assert_eq!(parse_numeric("1e999"), 0.0);
    }

    #[test]
    fn numeric_prefix_is_kept() {
        assert_eq!(parse_numeric("12kg"), 12.0);
        assert_eq!(parse_numeric("3.25 pcs"), 3.25);
        assert_eq!(parse_numeric("5e"), 5.0);
        assert_eq!(parse_numeric("5e+"), 5.0);
        assert_eq!(parse_numeric("1.2.3"), 1.2);
        assert_eq!(parse_numeric("-.5e2x"), -50.0);
        // only ASCII digits count
        assert_eq!(parse_numeric("๑๒"), 0.0);
    }

    #[test]
    fn classify_separates_blank_number_invalid() {
        assert_eq!(classify(""), CellValue::Blank);
        assert_eq!(classify(" "), CellValue::Blank);
        assert_eq!(classify(" 8 "), CellValue::Number(8.0));
        assert_eq!(classify("12kg"), CellValue::Invalid { coerced: 12.0 });
        assert_eq!(classify("abc"), CellValue::Invalid { coerced: 0.0 });
        assert_eq!(classify("inf"), CellValue::Invalid { coerced: 0.0 });
    }

    #[test]
    fn format_drops_integral_fraction() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(-4.0), "-4");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
    }
}
