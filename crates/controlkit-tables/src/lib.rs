//! # controlkit-tables
//!
//! Generic record tables: a [`ColumnMap`] chooses which record fields are
//! shown and under which header, a [`TableView`] adds the selection and
//! action columns, and [`render_table`] turns the result into Bootstrap 5
//! markup.
//!
//! ```rust
//! use controlkit_tables::{ColumnMap, Row, TableView};
//!
//! let columns = ColumnMap::new().column("nome", "Linguagem").unwrap();
//! let rows = vec![
//!     Row::new(1).cell("nome", "Dart"),
//!     Row::new(2).cell("nome", "Node").cell("interno", "hidden"),
//! ];
//!
//! let view = TableView::new(columns).actions_label("Ações");
//! let model = view.build(&rows).unwrap();
//! assert_eq!(model.header_cell_count(), 2);
//!
//! let html = view.render(&rows).unwrap();
//! assert!(html.contains("<td>Dart</td>"));
//! assert!(!html.contains("hidden"));
//! ```

mod column;
mod error;
mod row;
mod template;
mod view;

pub use column::{ColumnMap, ID_FIELD};
pub use error::{Result, TableError};
pub use row::Row;
pub use template::{html_escape, render_table};
pub use view::{TableModel, TableRow, TableView, DEFAULT_ACTIONS_LABEL, DEFAULT_EMPTY_MESSAGE};
