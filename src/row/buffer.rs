//! Edit buffer
//!
//! The row's working copy of an ingredient. Values here may be transiently
//! invalid (empty numbers, untrimmed names) and are never sent upward as-is.

use serde::Serialize;

use crate::models::{FieldValue, Ingredient, IngredientField, MacroTotals};
use crate::nutrition::{derive_totals, MacroInputs};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditBuffer {
    pub name: String,
    #[serde(rename = "calories100g")]
    pub calories_100g: FieldValue,
    #[serde(rename = "protein100g")]
    pub protein_100g: FieldValue,
    #[serde(rename = "fat100g")]
    pub fat_100g: FieldValue,
    #[serde(rename = "carbs100g")]
    pub carbs_100g: FieldValue,
    pub grams: FieldValue,
}

impl EditBuffer {
    /// Initialize from the canonical record
    pub fn from_record(record: &Ingredient) -> Self {
        Self {
            name: record.name.clone(),
            calories_100g: FieldValue::Number(record.calories_100g),
            protein_100g: FieldValue::Number(record.protein_100g),
            fat_100g: FieldValue::Number(record.fat_100g),
            carbs_100g: FieldValue::Number(record.carbs_100g),
            grams: FieldValue::Number(record.grams),
        }
    }

    pub fn get(&self, field: IngredientField) -> FieldValue {
        match field {
            IngredientField::Name => FieldValue::Text(self.name.clone()),
            IngredientField::Calories100g => self.calories_100g.clone(),
            IngredientField::Protein100g => self.protein_100g.clone(),
            IngredientField::Fat100g => self.fat_100g.clone(),
            IngredientField::Carbs100g => self.carbs_100g.clone(),
            IngredientField::Grams => self.grams.clone(),
        }
    }

    /// Store a value verbatim
    ///
    /// The name is always text; a number written to it keeps its display form.
    pub fn set(&mut self, field: IngredientField, value: FieldValue) {
        match field {
            IngredientField::Name => self.name = value.display_text(),
            IngredientField::Calories100g => self.calories_100g = value,
            IngredientField::Protein100g => self.protein_100g = value,
            IngredientField::Fat100g => self.fat_100g = value,
            IngredientField::Carbs100g => self.carbs_100g = value,
            IngredientField::Grams => self.grams = value,
        }
    }

    /// Totals for the buffered quantity
    pub fn totals(&self) -> MacroTotals {
        derive_totals(MacroInputs {
            calories_100g: &self.calories_100g,
            protein_100g: &self.protein_100g,
            fat_100g: &self.fat_100g,
            carbs_100g: &self.carbs_100g,
            grams: &self.grams,
        })
    }
}

impl From<&Ingredient> for EditBuffer {
    fn from(record: &Ingredient) -> Self {
        Self::from_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_copies_values() {
        let mut record = Ingredient::new("Oats");
        record.calories_100g = 389.0;
        record.grams = 40.0;

        let buffer = EditBuffer::from(&record);
        assert_eq!(buffer.get(IngredientField::Name), FieldValue::Text("Oats".to_string()));
        assert_eq!(buffer.get(IngredientField::Calories100g), FieldValue::Number(389.0));
        assert_eq!(buffer.get(IngredientField::Grams), FieldValue::Number(40.0));
    }

    #[test]
    fn test_set_stores_verbatim() {
        let mut buffer = EditBuffer::from_record(&Ingredient::new("Oats"));
        buffer.set(IngredientField::Name, "  oat flakes ".into());
        buffer.set(IngredientField::Grams, FieldValue::empty());
        buffer.set(IngredientField::Fat100g, "7.x".into());

        assert_eq!(buffer.name, "  oat flakes ");
        assert_eq!(buffer.grams, FieldValue::empty());
        assert_eq!(buffer.fat_100g, FieldValue::Text("7.x".to_string()));
    }

    #[test]
    fn test_totals_follow_buffer() {
        let mut record = Ingredient::new("Rice");
        record.calories_100g = 130.0;
        record.grams = 150.0;
        let mut buffer = EditBuffer::from_record(&record);
        assert_eq!(buffer.totals().calories, 195.0);

        buffer.set(IngredientField::Grams, "50".into());
        assert_eq!(buffer.totals().calories, 65.0);

        buffer.set(IngredientField::Calories100g, FieldValue::empty());
        assert_eq!(buffer.totals().calories, 0.0);
    }
}
