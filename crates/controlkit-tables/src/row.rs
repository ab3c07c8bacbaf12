//! Table rows: an integer id plus named scalar cells.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::column::ID_FIELD;
use crate::error::{Result, TableError};

/// One record of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// Row key; unique within a table.
    pub id: i64,
    /// Field values by name. Fields without a column are never shown.
    #[serde(flatten)]
    pub cells: BTreeMap<String, Value>,
}

impl Row {
    /// Creates a row with no cells.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            cells: BTreeMap::new(),
        }
    }

    /// Sets a cell.
    #[must_use]
    pub fn cell(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cells.insert(field.into(), value.into());
        self
    }

    /// Value of a cell.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.cells.get(field)
    }

    /// Builds a row from any record that serializes to an object with an
    /// integer `id` and scalar fields.
    pub fn from_record<T: Serialize>(record: &T) -> Result<Self> {
        let Value::Object(mut fields) = serde_json::to_value(record)? else {
            return Err(TableError::NotARecord);
        };

        let id = match fields.remove(ID_FIELD) {
            None => return Err(TableError::MissingId),
            Some(value) => value.as_i64().ok_or(TableError::InvalidId(value))?,
        };

        let mut row = Self::new(id);
        for (field, value) in fields {
            if !is_scalar(&value) {
                return Err(TableError::UnsupportedCell { id, field });
            }
            row.cells.insert(field, value);
        }
        Ok(row)
    }

    /// Builds rows from a slice of records.
    pub fn from_records<T: Serialize>(records: &[T]) -> Result<Vec<Self>> {
        records.iter().map(Self::from_record).collect()
    }
}

pub(crate) fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// Display text of a scalar cell; null renders empty.
pub(crate) fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
