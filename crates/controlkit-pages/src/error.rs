//! Error types for pages and page data.

use std::path::PathBuf;

use controlkit_forms::FormError;
use controlkit_tables::TableError;
use thiserror::Error;

/// Page-level errors.
#[derive(Debug, Error)]
pub enum PageError {
    /// Form schema or binding error.
    #[error("form error: {0}")]
    Form(#[from] FormError),

    /// Table construction error.
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// Page data could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Page data is not valid JSON.
    #[error("invalid page data: {0}")]
    Json(#[from] serde_json::Error),

    /// No field with this name on the page.
    #[error("page `{page}` has no field `{field}`")]
    UnknownField {
        /// Page name.
        page: &'static str,
        /// Requested field.
        field: String,
    },

    /// The page has no form to submit.
    #[error("page `{0}` has no form")]
    NoForm(&'static str),

    /// Tab index past the last tab.
    #[error("tab {index} out of range (page has {len} tabs)")]
    TabOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of tabs.
        len: usize,
    },

    /// A tab set needs at least one tab.
    #[error("tab set has no tabs")]
    NoTabs,

    /// A tab label has no letters or digits to build its endpoint from.
    #[error("tab label `{0}` has no letters or digits")]
    InvalidTabLabel(String),
}

/// Result type alias for page operations.
pub type Result<T> = std::result::Result<T, PageError>;
