//! Tests for the sort toggle protocol.

mod common;

use common::bill_grid;
use datagrid::prelude::*;

#[test]
fn test_sort_cycle_never_returns_to_unsorted() {
    let (mut grid, captured) = bill_grid(GridConfig::new().sortable(true));
    assert_eq!(grid.sort_state("bill_amount"), SortState::Unsorted);

    let mut seen = Vec::new();
    for _ in 0..3 {
        assert!(grid.toggle_sort("bill_amount").is_handled());
        seen.push(grid.state().sort_by.clone());
    }
    let expected = |descending| {
        Some(SortBy {
            column_id: "bill_amount".to_string(),
            descending,
        })
    };
    assert_eq!(seen, vec![expected(false), expected(true), expected(false)]);

    let directions: Vec<_> = captured.sorts().iter().map(|s| s.direction).collect();
    assert_eq!(
        directions,
        vec![SortDirection::Asc, SortDirection::Desc, SortDirection::Asc]
    );
}

#[test]
fn test_sort_resets_to_first_page() {
    let (mut grid, captured) = bill_grid(GridConfig::new().sortable(true));
    grid.next_page();
    assert_eq!(grid.state().page_index, 1);

    grid.toggle_sort("bill_date");
    assert_eq!(grid.state().page_index, 0);
    assert_eq!(
        captured.sorts(),
        vec![SortChange {
            sort_by: "bill_date".to_string(),
            direction: SortDirection::Asc,
            page: 0,
            page_size: 10,
        }]
    );
}

#[test]
fn test_engaging_another_column_clears_previous() {
    let (mut grid, _) = bill_grid(GridConfig::new().sortable(true));
    grid.toggle_sort("bill_amount");
    grid.toggle_sort("bill_amount");
    assert_eq!(grid.sort_state("bill_amount"), SortState::Desc);

    grid.toggle_sort("bill_number");
    assert_eq!(grid.sort_state("bill_amount"), SortState::Unsorted);
    assert_eq!(grid.sort_state("bill_number"), SortState::Asc);
}

#[test]
fn test_disabled_column_is_not_sortable() {
    let (mut grid, captured) = bill_grid(GridConfig::new().sortable(true));
    assert_eq!(grid.toggle_sort("bill_status"), EventResult::Ignored);
    assert_eq!(grid.toggle_sort("no_such_column"), EventResult::Ignored);
    assert!(grid.state().sort_by.is_none());
    assert!(captured.sorts().is_empty());
}

#[test]
fn test_sorting_globally_disabled() {
    let (mut grid, captured) = bill_grid(GridConfig::new());
    assert_eq!(grid.toggle_sort("bill_amount"), EventResult::Ignored);
    assert!(captured.sorts().is_empty());
    assert!(grid.columns().iter().all(|c| !c.sortable));
}

#[test]
fn test_direction_wire_names() {
    assert_eq!(SortDirection::Asc.to_string(), "asc");
    assert_eq!(SortDirection::Desc.to_string(), "desc");
}
