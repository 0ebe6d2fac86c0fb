//! Row Session Tools
//!
//! The parent side of a single ingredient row: owns the canonical record,
//! tracks which field has focus, and merges the row's patches.

use serde::Serialize;

use crate::config::RowConfig;
use crate::models::{FieldValue, Ingredient, IngredientField, IngredientPatch, MacroTotals};
use crate::row::{IngredientRow, RowError, RowEvent, RowResult, RowView};

/// Counters reported by the status tool
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SessionStats {
    pub records_loaded: u64,
    pub changes: u64,
    pub patches_received: u64,
    pub patches_applied: u64,
    pub removals: u64,
}

/// Response for row_load
#[derive(Debug, Serialize)]
pub struct LoadRowResponse {
    pub record: Ingredient,
    pub view: RowView,
}

/// Response for row_change_field
#[derive(Debug, Serialize)]
pub struct ChangeFieldResponse {
    pub field: IngredientField,
    pub buffered: FieldValue,
    /// Patches emitted when focus moved away from another field
    pub confirmed: Vec<IngredientPatch>,
    pub totals: MacroTotals,
}

/// Response for row_confirm_field
#[derive(Debug, Serialize)]
pub struct ConfirmFieldResponse {
    pub patch: IngredientPatch,
    /// Patches emitted when the focused field was blurred first
    pub confirmed: Vec<IngredientPatch>,
    pub record_changed: bool,
    pub record: Ingredient,
    pub totals: MacroTotals,
}

/// Response for row_remove
#[derive(Debug, Serialize)]
pub struct RemoveRowResponse {
    pub removed: bool,
    pub name: String,
}

/// A single ingredient row together with its owning record
#[derive(Debug, Default)]
pub struct RowSession {
    config: RowConfig,
    row: Option<IngredientRow>,
    focused: Option<IngredientField>,
    stats: SessionStats,
}

impl RowSession {
    pub fn new(config: RowConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> RowConfig {
        self.config
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn is_loaded(&self) -> bool {
        self.row.is_some()
    }

    pub fn focused(&self) -> Option<IngredientField> {
        self.focused
    }

    /// The canonical record, if a row is loaded
    pub fn record(&self) -> Option<&Ingredient> {
        self.row.as_ref().map(IngredientRow::record)
    }

    fn row_mut(&mut self) -> RowResult<&mut IngredientRow> {
        self.row.as_mut().ok_or(RowError::NoRow)
    }

    /// Replace the canonical record, re-initializing the row
    pub fn load(&mut self, record: Ingredient) -> LoadRowResponse {
        tracing::info!("Loading ingredient '{}'", record.name);
        self.focused = None;
        self.stats.records_loaded += 1;

        let policy = self.config.negative_policy;
        let row = self
            .row
            .get_or_insert_with(|| IngredientRow::new(Ingredient::default()).with_negative_policy(policy));
        row.on_record_replaced(record);

        LoadRowResponse {
            record: row.record().clone(),
            view: row.view(),
        }
    }

    /// Keystroke in `field`
    ///
    /// Typing into a different field than the focused one blurs the focused
    /// field first, so its pending edit is confirmed before the new keystroke.
    pub fn change_field(&mut self, field: IngredientField, value: FieldValue) -> RowResult<ChangeFieldResponse> {
        self.row_mut()?;

        let mut confirmed = Vec::new();
        if let Some(previous) = self.focused.filter(|f| *f != field) {
            confirmed.push(self.confirm(previous)?.patch);
        }

        let row = self.row_mut()?;
        row.on_field_changed(field, value);
        let buffered = row.buffer().get(field);
        let totals = row.totals();

        self.focused = Some(field);
        self.stats.changes += 1;

        Ok(ChangeFieldResponse {
            field,
            buffered,
            confirmed,
            totals,
        })
    }

    /// Blur `field`, or the focused field when none is given
    ///
    /// Confirming a field other than the focused one blurs the focused field
    /// first; otherwise a record change would reset its pending edit.
    pub fn confirm_field(&mut self, field: Option<IngredientField>) -> RowResult<ConfirmFieldResponse> {
        self.row_mut()?;
        let field = field.or(self.focused).ok_or(RowError::NoFocusedField)?;

        let mut confirmed = Vec::new();
        let mut blur_changed = false;
        if let Some(previous) = self.focused.filter(|f| *f != field) {
            let blurred = self.confirm(previous)?;
            blur_changed = blurred.record_changed;
            confirmed.push(blurred.patch);
        }

        let mut response = self.confirm(field)?;
        response.confirmed = confirmed;
        response.record_changed |= blur_changed;
        Ok(response)
    }

    fn confirm(&mut self, field: IngredientField) -> RowResult<ConfirmFieldResponse> {
        let mut events: Vec<RowEvent> = Vec::new();
        let patch = self.row_mut()?.on_field_confirmed(field, &mut events);

        if self.focused == Some(field) {
            self.focused = None;
        }

        let mut record_changed = false;
        for event in events {
            if let RowEvent::Update(update) = event {
                record_changed |= self.merge(&update)?;
            }
        }

        let row = self.row_mut()?;
        Ok(ConfirmFieldResponse {
            patch,
            confirmed: Vec::new(),
            record_changed,
            record: row.record().clone(),
            totals: row.totals(),
        })
    }

    /// Merge a patch into the canonical record
    ///
    /// The merged record goes back down through `sync_record`, so only a
    /// record that actually changed resets the row's buffer.
    fn merge(&mut self, patch: &IngredientPatch) -> RowResult<bool> {
        self.stats.patches_received += 1;
        let row = self.row_mut()?;

        let mut record = row.record().clone();
        record.apply_patch(patch)?;
        let changed = row.sync_record(&record);
        if changed {
            self.stats.patches_applied += 1;
            tracing::info!("Applied patch to '{}'", patch.field());
        } else {
            tracing::debug!("Ignored redundant patch to '{}'", patch.field());
        }
        Ok(changed)
    }

    /// Removal request from the row; the session drops the record
    pub fn remove(&mut self) -> RowResult<RemoveRowResponse> {
        let mut events: Vec<RowEvent> = Vec::new();
        self.row_mut()?.on_remove_requested(&mut events);

        let mut response = RemoveRowResponse {
            removed: false,
            name: String::new(),
        };
        for event in events {
            if event == RowEvent::Remove {
                if let Some(row) = self.row.take() {
                    response.removed = true;
                    response.name = row.record().name.clone();
                }
                self.focused = None;
                self.stats.removals += 1;
            }
        }

        tracing::info!("Removed ingredient '{}'", response.name);
        Ok(response)
    }

    /// Current render snapshot
    pub fn view(&self) -> RowResult<RowView> {
        self.row.as_ref().map(IngredientRow::view).ok_or(RowError::NoRow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::NegativePolicy;

    fn rice() -> Ingredient {
        Ingredient {
            name: "Rice".to_string(),
            calories_100g: 130.0,
            protein_100g: 2.0,
            fat_100g: 1.0,
            carbs_100g: 28.0,
            grams: 150.0,
            is_new: true,
            is_removing: false,
        }
    }

    fn loaded() -> RowSession {
        let mut session = RowSession::new(RowConfig::default());
        session.load(rice());
        session
    }

    #[test]
    fn test_requires_loaded_row() {
        let mut session = RowSession::new(RowConfig::default());
        assert_eq!(
            session.change_field(IngredientField::Grams, "5".into()).unwrap_err(),
            RowError::NoRow
        );
        assert_eq!(session.confirm_field(None).unwrap_err(), RowError::NoRow);
        assert_eq!(session.remove().unwrap_err(), RowError::NoRow);
        assert_eq!(session.view().unwrap_err(), RowError::NoRow);
    }

    #[test]
    fn test_load_renders_view() {
        let mut session = RowSession::new(RowConfig::default());
        let response = session.load(rice());
        assert_eq!(response.record, rice());
        assert_eq!(response.view.totals.calories, 195.0);
        assert_eq!(response.view.visual_state, crate::row::VisualState::Entering);
    }

    #[test]
    fn test_change_then_confirm_updates_record() {
        let mut session = loaded();

        let changed = session.change_field(IngredientField::Grams, "200".into()).unwrap();
        assert!(changed.confirmed.is_empty());
        assert_eq!(changed.totals.calories, 260.0);
        assert_eq!(session.record().unwrap().grams, 150.0);

        let confirmed = session.confirm_field(None).unwrap();
        assert!(confirmed.record_changed);
        assert_eq!(confirmed.record.grams, 200.0);
        assert_eq!(session.focused(), None);
        assert_eq!(session.stats().patches_applied, 1);
    }

    #[test]
    fn test_redundant_confirm_is_noop() {
        let mut session = loaded();

        let first = session.confirm_field(Some(IngredientField::Calories100g)).unwrap();
        let second = session.confirm_field(Some(IngredientField::Calories100g)).unwrap();

        assert!(!first.record_changed);
        assert!(!second.record_changed);
        assert_eq!(first.patch, second.patch);
        assert_eq!(session.stats().patches_received, 2);
        assert_eq!(session.stats().patches_applied, 0);
    }

    #[test]
    fn test_focus_move_confirms_previous_field() {
        let mut session = loaded();

        session.change_field(IngredientField::Name, "  Basmati  ".into()).unwrap();
        let response = session.change_field(IngredientField::Grams, "".into()).unwrap();

        assert_eq!(
            response.confirmed,
            vec![IngredientPatch::new(IngredientField::Name, "Basmati".into())]
        );
        assert_eq!(session.record().unwrap().name, "Basmati");
        assert_eq!(session.focused(), Some(IngredientField::Grams));
        assert_eq!(response.buffered, FieldValue::empty());
    }

    #[test]
    fn test_load_discards_unconfirmed_edit() {
        let mut session = loaded();
        session.change_field(IngredientField::Name, "Half-typed".into()).unwrap();

        let oats = Ingredient::new("Oats");
        let response = session.load(oats.clone());

        assert_eq!(response.record, oats);
        assert_eq!(session.focused(), None);
        assert_eq!(session.stats().patches_received, 0);
        let view = session.view().unwrap();
        assert_eq!(view.input(IngredientField::Name).unwrap().value, "Oats");
    }

    #[test]
    fn test_confirm_other_field_blurs_focused_first() {
        let mut session = RowSession::new(RowConfig {
            negative_policy: NegativePolicy::Clamp,
        });
        let mut record = rice();
        record.grams = -5.0;
        session.load(record);

        session.change_field(IngredientField::Name, "Basmati".into()).unwrap();
        let response = session.confirm_field(Some(IngredientField::Grams)).unwrap();

        assert_eq!(
            response.confirmed,
            vec![IngredientPatch::new(IngredientField::Name, "Basmati".into())]
        );
        assert!(response.record_changed);
        assert_eq!(response.record.name, "Basmati");
        assert_eq!(response.record.grams, 0.0);
        assert_eq!(session.focused(), None);
        assert_eq!(session.confirm_field(None).unwrap_err(), RowError::NoFocusedField);
        assert_eq!(session.record().unwrap().name, "Basmati");
    }

    #[test]
    fn test_blur_change_counts_as_record_change() {
        let mut session = loaded();
        session.change_field(IngredientField::Name, "Brown rice".into()).unwrap();

        let response = session.confirm_field(Some(IngredientField::Fat100g)).unwrap();
        assert!(response.record_changed);
        assert_eq!(response.record.name, "Brown rice");
        assert_eq!(response.record.fat_100g, 1.0);
    }

    #[test]
    fn test_confirm_focused_field_reports_no_extra_patches() {
        let mut session = loaded();
        session.change_field(IngredientField::Grams, "80".into()).unwrap();

        let response = session.confirm_field(Some(IngredientField::Grams)).unwrap();
        assert!(response.confirmed.is_empty());
        assert_eq!(response.record.grams, 80.0);
    }

    #[test]
    fn test_confirm_without_focus() {
        let mut session = loaded();
        assert_eq!(session.confirm_field(None).unwrap_err(), RowError::NoFocusedField);
    }

    #[test]
    fn test_remove_drops_record() {
        let mut session = loaded();
        let response = session.remove().unwrap();

        assert!(response.removed);
        assert_eq!(response.name, "Rice");
        assert!(!session.is_loaded());
        assert_eq!(session.stats().removals, 1);
    }

    #[test]
    fn test_clamp_config_reaches_row() {
        let mut session = RowSession::new(RowConfig {
            negative_policy: NegativePolicy::Clamp,
        });
        session.load(rice());
        session.change_field(IngredientField::Fat100g, "-2".into()).unwrap();

        let confirmed = session.confirm_field(None).unwrap();
        assert_eq!(confirmed.patch.value(), &FieldValue::Number(0.0));
    }
}
