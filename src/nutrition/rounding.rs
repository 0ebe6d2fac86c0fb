//! Display rounding shared by every derived amount

/// Decimal places kept in derived amounts
pub const ROUND_PRECISION: i32 = 1;

/// Round to `ROUND_PRECISION` decimal places, halves toward positive infinity
///
/// Non-finite input rounds to zero. Values too large to scale are returned
/// unchanged; at that magnitude every f64 is already a whole number.
pub fn round(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(ROUND_PRECISION);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = (scaled + 0.5).floor() / factor;
    // Avoid showing "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
