//! Tests for single and multi row selection.

mod common;

use common::{bill_grid, bills};
use datagrid::prelude::*;

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_single_select_replaces_selection() {
    let (mut grid, captured) = bill_grid(GridConfig::new().single_select(true));
    assert_eq!(grid.selection_mode(), SelectionMode::Single);

    assert!(grid.toggle_row_selected("3").is_handled());
    assert_eq!(grid.selected_ids(), ids(&["3"]));
    assert!(grid.toggle_row_selected("5").is_handled());
    assert_eq!(grid.selected_ids(), ids(&["5"]));

    assert_eq!(
        captured.selects(),
        vec![
            RowSelect { selected_ids: ids(&["3"]) },
            RowSelect { selected_ids: ids(&["5"]) },
        ]
    );
}

#[test]
fn test_single_select_same_row_is_noop() {
    let (mut grid, captured) = bill_grid(GridConfig::new().single_select(true));
    grid.toggle_row_selected("3");
    assert_eq!(grid.toggle_row_selected("3"), EventResult::Ignored);
    assert_eq!(grid.selected_ids(), ids(&["3"]));
    assert_eq!(captured.selects().len(), 1);
}

#[test]
fn test_single_select_has_no_select_all() {
    let (mut grid, captured) = bill_grid(
        GridConfig::new()
            .single_select(true)
            .select_column_label("Pick"),
    );
    assert_eq!(grid.toggle_select_all(), EventResult::Ignored);
    assert_eq!(grid.toggle_all_rows_selected(true), EventResult::Ignored);
    assert!(captured.selects().is_empty());

    let view = grid.view();
    let header = view.header_cell("selection").unwrap();
    assert_eq!(header.content, HeaderContent::Label("Pick".to_string()));

    grid.toggle_row_selected("2");
    let view = grid.view();
    assert_eq!(
        view.row("2").unwrap().control,
        SelectionControl::Radio { checked: true }
    );
    assert_eq!(
        view.row("1").unwrap().control,
        SelectionControl::Radio { checked: false }
    );
}

#[test]
fn test_multi_select_toggles_membership() {
    let (mut grid, captured) = bill_grid(GridConfig::new());
    grid.toggle_row_selected("3");
    grid.toggle_row_selected("5");
    assert_eq!(grid.selected_ids(), ids(&["3", "5"]));
    grid.toggle_row_selected("3");
    assert_eq!(grid.selected_ids(), ids(&["5"]));

    assert_eq!(
        captured.selects(),
        vec![
            RowSelect { selected_ids: ids(&["3"]) },
            RowSelect { selected_ids: ids(&["3", "5"]) },
            RowSelect { selected_ids: ids(&["5"]) },
        ]
    );
}

#[test]
fn test_selected_ids_in_numeric_order() {
    let (mut grid, captured) = bill_grid(GridConfig::new());
    grid.toggle_row_selected("2");
    grid.toggle_row_selected("10");
    assert_eq!(grid.selected_ids(), ids(&["2", "10"]));
    assert_eq!(
        captured.selects().last(),
        Some(&RowSelect {
            selected_ids: ids(&["2", "10"])
        })
    );
}

#[test]
fn test_off_page_row_is_ignored() {
    let (mut grid, captured) = bill_grid(GridConfig::new().single_select(true));
    grid.toggle_row_selected("3");
    assert_eq!(grid.toggle_row_selected("99"), EventResult::Ignored);
    assert_eq!(grid.toggle_row_selected(""), EventResult::Ignored);
    assert_eq!(grid.selected_ids(), ids(&["3"]));
    assert_eq!(captured.selects().len(), 1);
}

#[test]
fn test_select_all_only_touches_visible_rows() {
    let (mut grid, captured) = bill_grid(GridConfig::new());
    grid.set_data(vec![common::bill(5), common::bill(6), common::bill(7)])
        .unwrap();
    grid.toggle_row_selected("5");
    assert_eq!(grid.header_check_state(), CheckState::Indeterminate);

    assert!(grid.toggle_all_rows_selected(true).is_handled());
    assert_eq!(grid.selected_ids(), ids(&["5", "6", "7"]));
    assert_eq!(grid.header_check_state(), CheckState::Checked);

    assert!(grid.toggle_all_rows_selected(false).is_handled());
    assert!(grid.selected_ids().is_empty());
    assert_eq!(grid.header_check_state(), CheckState::Unchecked);
    assert_eq!(captured.selects().len(), 3);
}

#[test]
fn test_select_all_keeps_other_pages() {
    let (mut grid, _) = bill_grid(GridConfig::new().selected(["15"]));
    assert_eq!(grid.header_check_state(), CheckState::Unchecked);

    grid.toggle_all_rows_selected(true);
    assert_eq!(grid.selected_ids().len(), 11);
    grid.toggle_all_rows_selected(false);
    assert_eq!(grid.selected_ids(), ids(&["15"]));
}

#[test]
fn test_header_click_toggles_all() {
    let (mut grid, _) = bill_grid(GridConfig::new());
    assert!(grid.toggle_select_all().is_handled());
    assert_eq!(grid.header_check_state(), CheckState::Checked);
    assert!(grid.toggle_select_all().is_handled());
    assert_eq!(grid.header_check_state(), CheckState::Unchecked);

    grid.toggle_row_selected("1");
    grid.toggle_select_all();
    assert_eq!(grid.header_check_state(), CheckState::Checked);
}

#[test]
fn test_selection_survives_page_change() {
    let (mut grid, _) = bill_grid(GridConfig::new());
    grid.toggle_row_selected("2");
    grid.next_page();
    grid.set_data(bills(11, 21)).unwrap();

    assert_eq!(grid.selected_ids(), ids(&["2"]));
    assert!(grid.selected_rows().is_empty());
    assert_eq!(grid.header_check_state(), CheckState::Unchecked);
    assert!(grid.view().rows.iter().all(|r| !r.is_selected()));

    grid.previous_page();
    grid.set_data(bills(1, 11)).unwrap();
    assert_eq!(grid.selected_rows().len(), 1);
    assert!(grid.view().row("2").unwrap().is_selected());
}

#[test]
fn test_initial_selection_seeds_state() {
    let (grid, captured) = bill_grid(GridConfig::new().selected(["1", "4"]));
    assert_eq!(grid.selected_ids(), ids(&["1", "4"]));
    assert_eq!(grid.header_check_state(), CheckState::Indeterminate);
    assert!(captured.selects().is_empty());
}

#[test]
fn test_empty_page_header_is_unchecked() {
    let (mut grid, _) = bill_grid(GridConfig::new().selected(["1"]));
    grid.set_data(Vec::new()).unwrap();
    assert_eq!(grid.header_check_state(), CheckState::Unchecked);
    assert_eq!(grid.toggle_all_rows_selected(true), EventResult::Ignored);
}
