//! Ingredient row
//!
//! The editable row: edit buffer, confirmation-time normalization, event
//! handling, and the render snapshot.

mod buffer;
mod component;
mod error;
mod normalize;
mod view;

pub use buffer::EditBuffer;
pub use component::{IngredientRow, RowEvent, RowListener};
pub use error::{RowError, RowResult};
pub use normalize::{normalize_field, normalize_name, normalize_number, NegativePolicy};
pub use view::{InputView, RemoveButtonView, RowView, VisualState, REMOVE_ICON_SIZE};
