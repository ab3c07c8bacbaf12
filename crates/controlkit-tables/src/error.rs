//! Error types for table construction.

use thiserror::Error;

/// Errors raised while declaring columns or building a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// `id` is the row key and cannot be a column.
    #[error("column `{0}` is reserved for the row id")]
    ReservedColumn(String),

    /// Column declared twice.
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    /// Two rows share an id.
    #[error("duplicate row id: {0}")]
    DuplicateRowId(i64),

    /// A record did not serialize to an object.
    #[error("record is not an object")]
    NotARecord,

    /// A record has no `id` field.
    #[error("record has no `id` field")]
    MissingId,

    /// A record's `id` is not an integer.
    #[error("record id is not an integer: {0}")]
    InvalidId(serde_json::Value),

    /// A cell holds an array or an object.
    #[error("row {id}: field `{field}` is not a scalar value")]
    UnsupportedCell {
        /// Row id.
        id: i64,
        /// Field name.
        field: String,
    },

    /// Record serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
