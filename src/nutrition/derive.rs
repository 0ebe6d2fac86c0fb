//! Derived totals for an ingredient quantity
//!
//! Totals are recomputed from buffered values on every read and never stored.

use super::number::coerce_number;
use crate::models::{FieldValue, MacroTotals};

/// Amount of a per-100g value present in `grams` of an ingredient, unrounded
///
/// Both inputs are read with `coerce_number`, so empty or non-numeric buffers
/// contribute zero. A NaN product (e.g. infinity times zero) is zero too.
fn raw_amount(per_100g: &FieldValue, grams: &FieldValue) -> f64 {
    let amount = (coerce_number(per_100g) / 100.0) * coerce_number(grams);
    if amount.is_nan() {
        0.0
    } else {
        amount
    }
}

/// Per-100g inputs of a row, as currently buffered
#[derive(Debug, Clone, Copy)]
pub struct MacroInputs<'a> {
    pub calories_100g: &'a FieldValue,
    pub protein_100g: &'a FieldValue,
    pub fat_100g: &'a FieldValue,
    pub carbs_100g: &'a FieldValue,
    pub grams: &'a FieldValue,
}

/// Calculate the rounded totals shown for a row
pub fn derive_totals(inputs: MacroInputs<'_>) -> MacroTotals {
    MacroTotals {
        calories: raw_amount(inputs.calories_100g, inputs.grams),
        protein: raw_amount(inputs.protein_100g, inputs.grams),
        fat: raw_amount(inputs.fat_100g, inputs.grams),
        carbs: raw_amount(inputs.carbs_100g, inputs.grams),
    }
    .rounded()
}
