//! Numeric readings of raw field input
//!
//! Confirmation reads a lenient leading literal ("12abc" is 12), while the
//! derived totals read the whole text strictly ("12abc" is not a number).

use crate::models::FieldValue;

/// Length in bytes of the decimal literal at the start of `s`
///
/// Accepts an optional sign, digits with an optional fraction (or a bare
/// fraction like ".5"), and an exponent only when it has digits.
fn leading_literal_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if mantissa_digits > 0 || frac_digits > 0 {
            end = frac_end;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    end
}

/// Parse the longest leading number in `text`, ignoring surrounding whitespace
///
/// Examples:
/// - "12abc" -> Some(12.0)
/// - "  3.5 kg" -> Some(3.5)
/// - ".5" -> Some(0.5)
/// - "abc" -> None
///
/// Literals that overflow to infinity yield `None`.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let len = leading_literal_len(trimmed);
    if len == 0 {
        return None;
    }
    trimmed[..len]
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Parse `text` only if the whole trimmed text is one decimal literal
pub fn parse_whole_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let len = leading_literal_len(trimmed);
    if len == 0 || len != trimmed.len() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Read a buffered value as a number for display math
///
/// Empty text reads as zero; anything that is not a number (NaN) also reads
/// as zero. The buffered value itself is never touched.
pub fn coerce_number(value: &FieldValue) -> f64 {
    let n = match value {
        FieldValue::Number(n) => *n,
        FieldValue::Text(text) if text.trim().is_empty() => 0.0,
        FieldValue::Text(text) => parse_whole_number(text).unwrap_or(f64::NAN),
    };
    if n.is_nan() {
        0.0
    } else {
        n
    }
}
