//! Row error types

use thiserror::Error;

/// Errors raised while driving an ingredient row
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("Unknown ingredient field: {0}")]
    UnknownField(String),

    #[error("Field '{field}' expects {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Unsupported field value: {0}")]
    UnsupportedValue(String),

    #[error("No ingredient row loaded")]
    NoRow,

    #[error("No field has focus")]
    NoFocusedField,
}

/// Result type for row operations
pub type RowResult<T> = Result<T, RowError>;
