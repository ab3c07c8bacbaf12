//! Column declarations.

use crate::error::{Result, TableError};

/// Name of the row key field; never a column.
pub const ID_FIELD: &str = "id";

/// Ordered mapping from record field name to header label.
///
/// The order of declaration is the order of the header cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: Vec<(String, String)>,
}

impl ColumnMap {
    /// Creates an empty column map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column shown under `label`.
    pub fn column(mut self, field: impl Into<String>, label: impl Into<String>) -> Result<Self> {
        let field = field.into();
        if field == ID_FIELD {
            return Err(TableError::ReservedColumn(field));
        }
        if self.contains(&field) {
            return Err(TableError::DuplicateColumn(field));
        }
        self.columns.push((field, label.into()));
        Ok(self)
    }

    /// Builds a column map from `(field, label)` pairs.
    pub fn from_pairs<I, F, L>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (F, L)>,
        F: Into<String>,
        L: Into<String>,
    {
        pairs
            .into_iter()
            .try_fold(Self::new(), |map, (field, label)| map.column(field, label))
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no column is declared.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// `(field, label)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(field, label)| (field.as_str(), label.as_str()))
    }

    /// Whether `field` is a column.
    pub fn contains(&self, field: &str) -> bool {
        self.columns.iter().any(|(f, _)| f == field)
    }

    /// Header label of `field`.
    pub fn label(&self, field: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, label)| label.as_str())
    }
}
