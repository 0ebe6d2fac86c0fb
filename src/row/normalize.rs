//! Confirmation-time normalization
//!
//! Turns whatever is buffered into a valid stored value: names are trimmed,
//! numbers are parsed or fall back to zero. Nothing here is ever rejected.

use crate::models::{FieldValue, IngredientField};
use crate::nutrition::parse_leading_number;

/// What to do with a negative number that survives parsing
///
/// Number inputs advertise a minimum of zero but the parser accepts negative
/// entries. `Accept` keeps them (current product behavior, logged as a
/// warning); `Clamp` stores zero instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativePolicy {
    #[default]
    Accept,
    Clamp,
}

impl NegativePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NegativePolicy::Accept => "accept",
            NegativePolicy::Clamp => "clamp",
        }
    }
}

/// Trim a buffered name
pub fn normalize_name(raw: &FieldValue) -> String {
    raw.display_text().trim().to_string()
}

/// Parse a buffered number, falling back to zero for empty or non-numeric text
pub fn normalize_number(field: IngredientField, raw: &FieldValue, policy: NegativePolicy) -> f64 {
    let text = raw.display_text();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let value = parse_leading_number(trimmed).unwrap_or(0.0);
    if value < 0.0 {
        match policy {
            NegativePolicy::Accept => {
                tracing::warn!(
                    "Accepted negative value {} for '{}'; inputs expect a minimum of 0",
                    value,
                    field
                );
            }
            NegativePolicy::Clamp => return 0.0,
        }
    }
    value
}

/// Normalize the buffered value of any field
pub fn normalize_field(field: IngredientField, raw: &FieldValue, policy: NegativePolicy) -> FieldValue {
    if field.is_numeric() {
        FieldValue::Number(normalize_number(field, raw, policy))
    } else {
        FieldValue::Text(normalize_name(raw))
    }
}
