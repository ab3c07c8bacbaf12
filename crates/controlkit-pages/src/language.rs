//! Language admin page: the catalog of languages as a table.

use controlkit_tables::{ColumnMap, Row, TableModel, TableView};

use crate::config::PageData;
use crate::error::Result;

/// The language admin page.
#[derive(Debug, Clone)]
pub struct LanguageAdminPage {
    view: TableView,
    rows: Vec<Row>,
}

impl LanguageAdminPage {
    /// Page name used on the command line.
    pub const NAME: &'static str = "language";
    /// Page title.
    pub const TITLE: &'static str = "Linguagens";

    /// Builds the table over the configured languages.
    pub fn new(data: &PageData) -> Result<Self> {
        let columns = ColumnMap::new().column("nome", "Linguagem")?;
        let view = TableView::new(columns)
            .actions_label("Ações")
            .empty_message("Nenhuma linguagem cadastrada.");
        let rows = Row::from_records(&data.table_languages)?;
        Ok(Self { view, rows })
    }

    /// The table rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The resolved table.
    pub fn model(&self) -> Result<TableModel> {
        Ok(self.view.build(&self.rows)?)
    }

    /// Renders the table.
    pub fn render(&self) -> Result<String> {
        Ok(self.view.render(&self.rows)?)
    }
}
