//! Properties of rendered tables.

use controlkit_tables::{ColumnMap, Row, TableView};
use serde::Serialize;

#[derive(Serialize)]
struct Linguagem {
    id: i64,
    nome: &'static str,
    criado_por: &'static str,
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn header_count_is_columns_plus_actions() {
    let pairs = [("nome", "Nome"), ("versao", "Versão"), ("comando", "Comando")];
    for n in 0..=pairs.len() {
        let columns = ColumnMap::from_pairs(pairs[..n].iter().copied()).unwrap();
        for actions in [true, false] {
            let view = TableView::new(columns.clone()).actions(actions);
            let model = view.build(&[]).unwrap();
            assert_eq!(model.header_cell_count(), n + usize::from(actions));

            let html = view.render(&[]).unwrap();
            // The selection header is the one extra <th>.
            let header_cells = count(&html, "<th>") + count(&html, "<th ");
            assert_eq!(header_cells, model.header_cell_count() + 1);
        }
    }
}

#[test]
fn unmapped_fields_never_rendered() {
    let rows = Row::from_records(&[
        Linguagem { id: 1, nome: "Dart", criado_por: "segredo-1" },
        Linguagem { id: 2, nome: "Node", criado_por: "segredo-2" },
    ])
    .unwrap();
    let columns = ColumnMap::new().column("nome", "Linguagem").unwrap();
    let html = TableView::new(columns).render(&rows).unwrap();
    assert!(!html.contains("segredo"));
    assert!(!html.contains("criado_por"));
}

#[test]
fn language_table_scenario() {
    let columns = ColumnMap::new().column("nome", "Linguagem").unwrap();
    let rows = vec![
        Row::new(1).cell("nome", "Dart"),
        Row::new(2).cell("nome", "Node"),
    ];
    let view = TableView::new(columns).actions_label("Ações");
    let model = view.build(&rows).unwrap();

    assert_eq!(model.headers, vec!["Linguagem".to_string()]);
    assert_eq!(model.rows.len(), 2);
    assert!(model.rows.iter().all(|row| row.cells.len() == 1));
    assert_eq!(model.rows[0].cells[0], "Dart");
    assert_eq!(model.rows[1].cells[0], "Node");

    let html = view.render(&rows).unwrap();
    assert_eq!(count(&html, "<tr data-row-id="), 2);
    assert_eq!(count(&html, "<td>"), 2);
    assert_eq!(count(&html, "<th>Linguagem</th>"), 1);
    assert_eq!(count(&html, "row-edit"), 2);
    assert_eq!(count(&html, "row-delete"), 2);
}

#[test]
fn capabilities_disable_buttons() {
    let columns = ColumnMap::new().column("nome", "Linguagem").unwrap();
    let rows = vec![Row::new(1).cell("nome", "Java")];
    let html = TableView::new(columns)
        .can_edit(false)
        .can_delete(false)
        .render(&rows)
        .unwrap();
    assert_eq!(count(&html, " disabled>"), 2);
}
