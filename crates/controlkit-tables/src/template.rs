//! Bootstrap 5 table markup.

use crate::view::{TableModel, TableRow};

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn disabled_attr(enabled: bool) -> &'static str {
    if enabled {
        ""
    } else {
        " disabled"
    }
}

fn render_row(row: &TableRow, actions: bool) -> String {
    let cells: Vec<String> = row
        .cells
        .iter()
        .map(|cell| format!("<td>{}</td>", html_escape(cell)))
        .collect();

    let actions_cell = if actions {
        format!(
            r#"<td class="table-actions">
                        <button type="button" class="btn btn-sm btn-outline-primary me-1 row-edit" data-row-id="{id}" aria-label="Edit"{edit}>
                            <i class="bi bi-pencil"></i>
                        </button>
                        <button type="button" class="btn btn-sm btn-outline-danger row-delete" data-row-id="{id}" aria-label="Delete"{delete}>
                            <i class="bi bi-trash"></i>
                        </button>
                    </td>"#,
            id = row.id,
            edit = disabled_attr(row.can_edit),
            delete = disabled_attr(row.can_delete),
        )
    } else {
        String::new()
    };

    format!(
        r#"<tr data-row-id="{id}">
                    <td class="text-center">
                        <input type="checkbox" class="form-check-input row-select" name="selected" value="{id}">
                    </td>
                    {cells}
                    {actions_cell}
                </tr>"#,
        id = row.id,
        cells = cells.join("\n"),
    )
}

/// Renders a resolved table.
///
/// The leading selection column has no label. When there are no rows a
/// single row spanning every column shows the empty message.
pub fn render_table(model: &TableModel) -> String {
    let headers: Vec<String> = model
        .headers
        .iter()
        .map(|label| format!("<th>{}</th>", html_escape(label)))
        .collect();

    let actions_header = model
        .actions
        .as_deref()
        .map(|label| format!(r#"<th style="width: 100px;">{}</th>"#, html_escape(label)))
        .unwrap_or_default();

    let body = if model.rows.is_empty() {
        format!(
            r#"<tr class="table-empty">
                    <td colspan="{}" class="text-center text-muted py-5">{}</td>
                </tr>"#,
            model.header_cell_count() + 1,
            html_escape(&model.empty_message)
        )
    } else {
        model
            .rows
            .iter()
            .map(|row| render_row(row, model.actions.is_some()))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"<div class="table-responsive">
            <table class="table table-striped table-hover mb-0">
                <thead class="table-light">
                    <tr>
                        <th class="text-center" style="width: 40px;">
                            <input type="checkbox" class="form-check-input select-all">
                        </th>
                        {headers}
                        {actions_header}
                    </tr>
                </thead>
                <tbody>
                    {body}
                </tbody>
            </table>
        </div>"#,
        headers = headers.join("\n"),
    )
}
