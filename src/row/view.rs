//! Row view
//!
//! A render snapshot of a row: input contents, labels, derived totals, and
//! the visual treatment selected by the record's presentation flags.

use serde::Serialize;

use crate::models::{Ingredient, IngredientField, MacroTotals};

use super::EditBuffer;

/// Icon size passed to the icon renderer for the removal button
pub const REMOVE_ICON_SIZE: u32 = 20;

/// Visual treatment of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualState {
    Entering,
    Exiting,
    Steady,
}

impl VisualState {
    /// Select the treatment; a new row shows its entry even while removing
    pub fn from_record(record: &Ingredient) -> Self {
        if record.is_new {
            VisualState::Entering
        } else if record.is_removing {
            VisualState::Exiting
        } else {
            VisualState::Steady
        }
    }
}

/// One input box of the row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputView {
    pub field: IngredientField,
    pub label: String,
    pub placeholder: &'static str,
    pub value: String,
}

/// The removal affordance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoveButtonView {
    pub label: &'static str,
    pub icon_size: u32,
}

/// Everything needed to draw one ingredient row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub inputs: Vec<InputView>,
    pub totals: MacroTotals,
    pub visual_state: VisualState,
    pub remove_button: RemoveButtonView,
}

impl RowView {
    pub fn render(record: &Ingredient, buffer: &EditBuffer) -> Self {
        let inputs = IngredientField::ALL
            .into_iter()
            .map(|field| InputView {
                field,
                label: field.label(),
                placeholder: if field.is_numeric() { "0" } else { "Ingredient name" },
                value: buffer.get(field).display_text(),
            })
            .collect();

        Self {
            inputs,
            totals: buffer.totals(),
            visual_state: VisualState::from_record(record),
            remove_button: RemoveButtonView {
                label: "Remove ingredient",
                icon_size: REMOVE_ICON_SIZE,
            },
        }
    }

    pub fn input(&self, field: IngredientField) -> Option<&InputView> {
        self.inputs.iter().find(|input| input.field == field)
    }
}
