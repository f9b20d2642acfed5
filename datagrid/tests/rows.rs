//! Tests for row identity and data replacement.

mod common;

use common::{bill, bill_grid, bills, init_logging};
use datagrid::prelude::*;
use serde_json::{Value, json};

#[test]
fn test_duplicate_row_ids_rejected() {
    let (mut grid, _) = bill_grid(GridConfig::new());
    let err = grid.set_data(vec![bill(4), bill(5), bill(4)]).unwrap_err();
    assert_eq!(
        err,
        RowIdentityError::Duplicate {
            id: "4".to_string()
        }
    );
    // Previous page is untouched.
    assert_eq!(grid.visible_ids().len(), 10);
}

#[test]
fn test_missing_row_id_rejected() {
    let (mut grid, _) = bill_grid(GridConfig::new());
    let err = grid
        .set_data(vec![bill(1), json!({ "bill_amount": 5 })])
        .unwrap_err();
    assert_eq!(err, RowIdentityError::Missing { index: 1 });
}

#[test]
fn test_function_strategy() {
    init_logging();
    let mut grid = TableController::builder(vec![Column::new("name")])
        .row_id(RowIdStrategy::func(|record: &Value, index, _| {
            record["name"].as_str().map(|n| format!("{}-{}", n, index))
        }))
        .build()
        .unwrap();
    grid.set_data(vec![json!({ "name": "a" }), json!({ "name": "b" })])
        .unwrap();
    assert_eq!(grid.visible_ids(), vec!["a-0", "b-1"]);
    assert_eq!(grid.row("b-1").unwrap().value("name"), Some(&json!("b")));
}

#[test]
fn test_orphan_selection_retained() {
    let (mut grid, captured) = bill_grid(GridConfig::new());
    grid.toggle_row_selected("3");
    grid.set_data(bills(21, 31)).unwrap();

    assert_eq!(grid.selected_ids(), vec!["3".to_string()]);
    assert!(grid.selected_rows().is_empty());
    // Replacing data never fires callbacks.
    assert_eq!(captured.selects().len(), 1);

    grid.toggle_row_selected("22");
    assert_eq!(
        captured.selects().last().unwrap().selected_ids,
        vec!["3".to_string(), "22".to_string()]
    );
}

#[test]
fn test_rows_resolve_cells_in_column_order() {
    let (grid, _) = bill_grid(GridConfig::new());
    let row = grid.row("7").unwrap();
    assert_eq!(row.index, 6);
    let ids: Vec<_> = row.cells.iter().map(|c| c.column_id.as_str()).collect();
    assert_eq!(ids, vec!["bill_number", "bill_amount", "bill_date", "bill_status"]);
    assert_eq!(row.value("bill_amount"), Some(&json!(700)));
    assert_eq!(row.original["customer"]["name"], json!("Customer 7"));
}

#[test]
fn test_empty_page() {
    let (mut grid, _) = bill_grid(GridConfig::new());
    grid.set_data(Vec::new()).unwrap();
    assert!(grid.rows().is_empty());
    assert!(grid.view().rows.is_empty());
}
