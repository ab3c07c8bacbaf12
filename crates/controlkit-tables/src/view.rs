//! Table views: column map plus capability flags, resolved against rows.

use std::collections::BTreeSet;

use tracing::debug;

use crate::column::ColumnMap;
use crate::error::{Result, TableError};
use crate::row::{cell_text, is_scalar, Row};
use crate::template::render_table;

/// Default header of the actions column.
pub const DEFAULT_ACTIONS_LABEL: &str = "Actions";

/// Default text of the empty-state row.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No items found.";

/// A generic table over rows, showing only the mapped columns.
#[derive(Debug, Clone)]
pub struct TableView {
    columns: ColumnMap,
    actions: bool,
    can_edit: bool,
    can_delete: bool,
    actions_label: String,
    empty_message: String,
}

impl TableView {
    /// Creates a view with actions shown and both capabilities on.
    pub fn new(columns: ColumnMap) -> Self {
        Self {
            columns,
            actions: true,
            can_edit: true,
            can_delete: true,
            actions_label: DEFAULT_ACTIONS_LABEL.to_string(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }

    /// Shows or hides the actions column.
    #[must_use]
    pub const fn actions(mut self, show: bool) -> Self {
        self.actions = show;
        self
    }

    /// Enables the edit button.
    #[must_use]
    pub const fn can_edit(mut self, enabled: bool) -> Self {
        self.can_edit = enabled;
        self
    }

    /// Enables the delete button.
    #[must_use]
    pub const fn can_delete(mut self, enabled: bool) -> Self {
        self.can_delete = enabled;
        self
    }

    /// Header of the actions column.
    #[must_use]
    pub fn actions_label(mut self, label: impl Into<String>) -> Self {
        self.actions_label = label.into();
        self
    }

    /// Text shown when there are no rows.
    #[must_use]
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// The column map.
    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// Resolves `rows` against the columns.
    ///
    /// Row ids must be unique and mapped cells scalar. Cells a row lacks
    /// resolve to the empty string; fields without a column are dropped.
    pub fn build(&self, rows: &[Row]) -> Result<TableModel> {
        let mut seen = BTreeSet::new();
        let mut table_rows = Vec::with_capacity(rows.len());

        for row in rows {
            if !seen.insert(row.id) {
                return Err(TableError::DuplicateRowId(row.id));
            }

            let mut cells = Vec::with_capacity(self.columns.len());
            for (field, _) in self.columns.iter() {
                let text = match row.get(field) {
                    Some(value) if !is_scalar(value) => {
                        return Err(TableError::UnsupportedCell {
                            id: row.id,
                            field: field.to_string(),
                        });
                    }
                    Some(value) => cell_text(value),
                    None => String::new(),
                };
                cells.push(text);
            }

            table_rows.push(TableRow {
                id: row.id,
                cells,
                can_edit: self.can_edit,
                can_delete: self.can_delete,
            });
        }

        debug!(
            columns = self.columns.len(),
            rows = table_rows.len(),
            actions = self.actions,
            "table built"
        );

        Ok(TableModel {
            headers: self.columns.iter().map(|(_, label)| label.to_string()).collect(),
            actions: self.actions.then(|| self.actions_label.clone()),
            rows: table_rows,
            empty_message: self.empty_message.clone(),
        })
    }

    /// Builds and renders the table.
    pub fn render(&self, rows: &[Row]) -> Result<String> {
        Ok(render_table(&self.build(rows)?))
    }
}

/// A table resolved for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    /// Header labels in column order.
    pub headers: Vec<String>,
    /// Label of the actions column, when shown.
    pub actions: Option<String>,
    /// Resolved rows.
    pub rows: Vec<TableRow>,
    /// Text of the empty-state row.
    pub empty_message: String,
}

impl TableModel {
    /// Number of labelled header cells: one per column plus the actions
    /// header. The selection column is not counted.
    pub fn header_cell_count(&self) -> usize {
        self.headers.len() + usize::from(self.actions.is_some())
    }
}

/// One resolved row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Row id.
    pub id: i64,
    /// Cell texts, one per column.
    pub cells: Vec<String>,
    /// Whether the edit button is enabled.
    pub can_edit: bool,
    /// Whether the delete button is enabled.
    pub can_delete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> ColumnMap {
        ColumnMap::new().column("nome", "Linguagem").unwrap()
    }

    #[test]
    fn test_defaults() {
        let model = TableView::new(columns()).build(&[]).unwrap();
        assert_eq!(model.headers, vec!["Linguagem".to_string()]);
        assert_eq!(model.actions.as_deref(), Some(DEFAULT_ACTIONS_LABEL));
        assert_eq!(model.header_cell_count(), 2);
        assert!(model.rows.is_empty());
    }

    #[test]
    fn test_without_actions() {
        let model = TableView::new(columns()).actions(false).build(&[]).unwrap();
        assert_eq!(model.actions, None);
        assert_eq!(model.header_cell_count(), 1);
    }

    #[test]
    fn test_missing_cell_is_empty() {
        let rows = [Row::new(1).cell("outro", "x")];
        let model = TableView::new(columns()).build(&rows).unwrap();
        assert_eq!(model.rows[0].cells, vec![String::new()]);
    }

    #[test]
    fn test_capability_flags() {
        let rows = [Row::new(1).cell("nome", "Dart")];
        let model = TableView::new(columns())
            .can_edit(false)
            .build(&rows)
            .unwrap();
        assert!(!model.rows[0].can_edit);
        assert!(model.rows[0].can_delete);
    }

    #[test]
    fn test_duplicate_row_id() {
        let rows = [Row::new(1), Row::new(1)];
        let err = TableView::new(columns()).build(&rows).unwrap_err();
        assert!(matches!(err, TableError::DuplicateRowId(1)));
    }

    #[test]
    fn test_nested_cell_rejected() {
        let rows = [Row::new(3).cell("nome", serde_json::json!({"pt": "Dart"}))];
        let err = TableView::new(columns()).build(&rows).unwrap_err();
        assert!(matches!(err, TableError::UnsupportedCell { id: 3, .. }));
    }

    #[test]
    fn test_nested_unmapped_cell_ignored() {
        let rows = [Row::new(3)
            .cell("nome", "Dart")
            .cell("versoes", serde_json::json!(["3.0"]))];
        let model = TableView::new(columns()).build(&rows).unwrap();
        assert_eq!(model.rows[0].cells, vec!["Dart".to_string()]);
    }
}
