//! Macro totals
//!
//! Derived calorie and macronutrient amounts shown beside an ingredient row.

use serde::Serialize;

use crate::nutrition::round;

/// Calories and macronutrients for a quantity of an ingredient
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64, // grams
    pub fat: f64,     // grams
    pub carbs: f64,   // grams
}

impl MacroTotals {
    /// Apply the shared display rounding to every amount
    pub fn rounded(&self) -> Self {
        Self {
            calories: round(self.calories),
            protein: round(self.protein),
            fat: round(self.fat),
            carbs: round(self.carbs),
        }
    }
}
