//! Ingredient row component
//!
//! Holds the last canonical record it was given plus an edit buffer, and
//! turns keystroke, blur, and removal events into upward notifications.

use crate::models::{FieldValue, Ingredient, IngredientField, IngredientPatch, MacroTotals};

use super::normalize::{normalize_field, NegativePolicy};
use super::view::RowView;
use super::EditBuffer;

/// Receiver of a row's upward notifications
pub trait RowListener {
    /// A field was confirmed; the patch carries exactly that field
    fn on_update(&mut self, patch: IngredientPatch);

    /// The user asked for this row to be removed
    fn on_remove(&mut self);
}

/// A notification emitted by a row
#[derive(Debug, Clone, PartialEq)]
pub enum RowEvent {
    Update(IngredientPatch),
    Remove,
}

impl RowListener for Vec<RowEvent> {
    fn on_update(&mut self, patch: IngredientPatch) {
        self.push(RowEvent::Update(patch));
    }

    fn on_remove(&mut self) {
        self.push(RowEvent::Remove);
    }
}

/// One editable ingredient row
#[derive(Debug, Clone)]
pub struct IngredientRow {
    record: Ingredient,
    buffer: EditBuffer,
    negative_policy: NegativePolicy,
}

impl IngredientRow {
    pub fn new(record: Ingredient) -> Self {
        let buffer = EditBuffer::from_record(&record);
        Self {
            record,
            buffer,
            negative_policy: NegativePolicy::default(),
        }
    }

    pub fn with_negative_policy(mut self, policy: NegativePolicy) -> Self {
        self.negative_policy = policy;
        self
    }

    /// The canonical record last passed in by the parent
    pub fn record(&self) -> &Ingredient {
        &self.record
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    /// Keystroke: store the raw value, no validation
    pub fn on_field_changed(&mut self, field: IngredientField, raw: impl Into<FieldValue>) {
        let raw = raw.into();
        tracing::debug!("Buffered {} = {:?}", field, raw);
        self.buffer.set(field, raw);
    }

    /// Blur: normalize the buffered field and always report it upward
    ///
    /// Returns the patch handed to the listener.
    pub fn on_field_confirmed<L: RowListener + ?Sized>(
        &mut self,
        field: IngredientField,
        listener: &mut L,
    ) -> IngredientPatch {
        let buffered = self.buffer.get(field);
        let normalized = normalize_field(field, &buffered, self.negative_policy);

        if buffered.display_text() != normalized.display_text() {
            self.buffer.set(field, normalized.clone());
        }

        tracing::debug!("Confirmed {} = {}", field, normalized);
        let patch = IngredientPatch::new(field, normalized);
        listener.on_update(patch.clone());
        patch
    }

    /// A record with a new identity arrived; unconfirmed edits are dropped
    pub fn on_record_replaced(&mut self, record: Ingredient) {
        tracing::debug!("Row re-initialized from record '{}'", record.name);
        self.buffer = EditBuffer::from_record(&record);
        self.record = record;
    }

    /// Re-initialize only when `record` differs from the last one seen
    ///
    /// Returns whether the buffer was reset.
    pub fn sync_record(&mut self, record: &Ingredient) -> bool {
        if *record == self.record {
            return false;
        }
        self.on_record_replaced(record.clone());
        true
    }

    /// Removal: tell the parent; the row deletes nothing itself
    pub fn on_remove_requested<L: RowListener + ?Sized>(&self, listener: &mut L) {
        tracing::debug!("Removal requested for '{}'", self.record.name);
        listener.on_remove();
    }

    /// Derived totals for the current buffer
    pub fn totals(&self) -> MacroTotals {
        self.buffer.totals()
    }

    pub fn view(&self) -> RowView {
        RowView::render(&self.record, &self.buffer)
    }
}
