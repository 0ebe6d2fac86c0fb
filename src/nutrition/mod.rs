//! Nutrition calculation module
//!
//! Number readings, shared rounding, and derived macro totals.

pub mod derive;
pub mod number;
pub mod rounding;

pub use derive::{derive_totals, MacroInputs};
pub use number::{coerce_number, parse_leading_number, parse_whole_number};
pub use rounding::{round, ROUND_PRECISION};
