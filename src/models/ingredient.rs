//! Ingredient model
//!
//! The canonical ingredient record owned by the parent container, the fields a
//! row can edit, and the single-field patches a row reports upward.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use rmcp::schemars;
use serde::{Deserialize, Serialize, Serializer};

use crate::row::{RowError, RowResult};

/// An editable field of an ingredient row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IngredientField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "calories100g")]
    Calories100g,
    #[serde(rename = "protein100g")]
    Protein100g,
    #[serde(rename = "fat100g")]
    Fat100g,
    #[serde(rename = "carbs100g")]
    Carbs100g,
    #[serde(rename = "grams")]
    Grams,
}

impl IngredientField {
    /// Fields in the order the row lays them out
    pub const ALL: [IngredientField; 6] = [
        IngredientField::Name,
        IngredientField::Calories100g,
        IngredientField::Protein100g,
        IngredientField::Fat100g,
        IngredientField::Carbs100g,
        IngredientField::Grams,
    ];

    /// Fields normalized with parse-or-zero on confirmation
    pub const NUMERIC: [IngredientField; 5] = [
        IngredientField::Calories100g,
        IngredientField::Protein100g,
        IngredientField::Fat100g,
        IngredientField::Carbs100g,
        IngredientField::Grams,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientField::Name => "name",
            IngredientField::Calories100g => "calories100g",
            IngredientField::Protein100g => "protein100g",
            IngredientField::Fat100g => "fat100g",
            IngredientField::Carbs100g => "carbs100g",
            IngredientField::Grams => "grams",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, IngredientField::Name)
    }

    /// Accessible label for the field's input
    pub fn label(&self) -> String {
        match self {
            IngredientField::Name => "Ingredient name".to_string(),
            other => other.as_str().replace("100g", " per 100g"),
        }
    }
}

impl fmt::Display for IngredientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IngredientField {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IngredientField::ALL
            .into_iter()
            .find(|field| field.as_str() == s.trim())
            .ok_or_else(|| RowError::UnknownField(s.to_string()))
    }
}

/// A raw or normalized field value: text as typed, or a number
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// The empty placeholder a number input holds while cleared
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    /// Text form used for input display and change detection
    pub fn display_text(&self) -> String {
        match self {
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Text(text) => text.clone(),
        }
    }

    /// Convert a JSON value received from a client
    pub fn from_json(value: &serde_json::Value) -> RowResult<Self> {
        match value {
            serde_json::Value::String(s) => Ok(FieldValue::Text(s.clone())),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(FieldValue::Number)
                .ok_or_else(|| RowError::UnsupportedValue(n.to_string())),
            serde_json::Value::Null => Ok(FieldValue::empty()),
            other => Err(RowError::UnsupportedValue(other.to_string())),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

/// Format a number the way an input box shows it ("150", "0.5", never "-0")
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        n.to_string()
    }
}

/// The canonical ingredient record
///
/// Missing fields deserialize to their zero values, so clients may load a
/// partially filled ingredient.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    #[serde(rename = "calories100g")]
    pub calories_100g: f64,
    #[serde(rename = "protein100g")]
    pub protein_100g: f64,
    #[serde(rename = "fat100g")]
    pub fat_100g: f64,
    #[serde(rename = "carbs100g")]
    pub carbs_100g: f64,
    pub grams: f64,
    pub is_new: bool,
    pub is_removing: bool,
}

impl Ingredient {
    /// Create an ingredient with all amounts at zero
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    fn numeric_mut(&mut self, field: IngredientField) -> Option<&mut f64> {
        match field {
            IngredientField::Name => None,
            IngredientField::Calories100g => Some(&mut self.calories_100g),
            IngredientField::Protein100g => Some(&mut self.protein_100g),
            IngredientField::Fat100g => Some(&mut self.fat_100g),
            IngredientField::Carbs100g => Some(&mut self.carbs_100g),
            IngredientField::Grams => Some(&mut self.grams),
        }
    }

    /// Merge a single-field patch
    ///
    /// Returns `false` when the patch carries the value already stored, so
    /// redundant confirmations leave the record untouched.
    pub fn apply_patch(&mut self, patch: &IngredientPatch) -> RowResult<bool> {
        let field = patch.field();
        match (field, patch.value()) {
            (IngredientField::Name, FieldValue::Text(text)) => {
                if self.name == *text {
                    return Ok(false);
                }
                self.name = text.clone();
                Ok(true)
            }
            (IngredientField::Name, FieldValue::Number(_)) => Err(RowError::TypeMismatch {
                field: field.as_str(),
                expected: "text",
            }),
            (_, FieldValue::Number(n)) => {
                let slot = self.numeric_mut(field).ok_or(RowError::TypeMismatch {
                    field: field.as_str(),
                    expected: "text",
                })?;
                if *slot == *n {
                    return Ok(false);
                }
                *slot = *n;
                Ok(true)
            }
            (_, FieldValue::Text(_)) => Err(RowError::TypeMismatch {
                field: field.as_str(),
                expected: "a number",
            }),
        }
    }
}

/// A single-field update reported by a row on confirmation
///
/// Serializes as a one-key object, e.g. `{"grams": 150}`.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientPatch {
    field: IngredientField,
    value: FieldValue,
}

impl IngredientPatch {
    pub fn new(field: IngredientField, value: FieldValue) -> Self {
        Self { field, value }
    }

    pub fn field(&self) -> IngredientField {
        self.field
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }
}

impl Serialize for IngredientPatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field.as_str(), &self.value)?;
        map.end()
    }
}
