//! Ingredient Row Library
//!
//! An editable recipe ingredient row: buffered edits, confirmation-time
//! normalization, and derived calorie and macro totals.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod row;
pub mod tools;
