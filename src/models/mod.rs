//! Data models
//!
//! The ingredient record edited by a row and the totals derived from it.

mod ingredient;
mod nutrition;

pub use ingredient::{format_number, FieldValue, Ingredient, IngredientField, IngredientPatch};
pub use nutrition::MacroTotals;
