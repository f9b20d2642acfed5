//! Tests for grid configuration loading.

use datagrid::config::{DEFAULT_PAGE_SIZE, DEFAULT_ROWS_PER_PAGE_OPTIONS};
use datagrid::prelude::*;

#[test]
fn test_defaults() {
    let config = GridConfig::default();
    assert_eq!(config.page, 0);
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.rows_per_page_options, DEFAULT_ROWS_PER_PAGE_OPTIONS.to_vec());
    assert!(!config.sortable);
    assert!(!config.single_select);
    assert!(config.selected.is_empty());
    assert_eq!(config.resize_mode, ResizeMode::Live);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_json_camel_case() {
    let config = GridConfig::from_json(
        r#"{
            "page": 2,
            "pageSize": 25,
            "sortable": true,
            "singleSelect": true,
            "selected": ["7"],
            "selectColumnLabel": "Pick",
            "rowsPerPageOptions": [25, 50],
            "disablePaginationInput": true,
            "dense": true,
            "resizeMode": "deferred"
        }"#,
    )
    .unwrap();

    assert_eq!(
        config,
        GridConfig::new()
            .page(2)
            .page_size(25)
            .sortable(true)
            .single_select(true)
            .selected(["7"])
            .select_column_label("Pick")
            .rows_per_page_options(vec![25, 50])
            .disable_pagination_input(true)
            .dense(true)
            .resize_mode(ResizeMode::Deferred)
    );
}

#[test]
fn test_from_json_fills_defaults() {
    let config = GridConfig::from_json(r#"{ "sortable": true }"#).unwrap();
    assert!(config.sortable);
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn test_from_json_parse_error() {
    let err = GridConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("Config parse error"));
}

#[test]
fn test_zero_page_size_rejected() {
    let err = GridConfig::from_json(r#"{ "pageSize": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroPageSize));

    let err = GridConfig::new()
        .rows_per_page_options(vec![10, 0])
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::EmptyPageSizeOption));
}

#[test]
fn test_builder_surfaces_config_errors() {
    let err = TableController::builder(vec![Column::new("a")])
        .config(GridConfig::new().page_size(0))
        .build()
        .unwrap_err();
    assert!(matches!(err, GridError::Config(ConfigError::ZeroPageSize)));
    assert_eq!(err.to_string(), "Page size must be greater than zero");
}

#[test]
fn test_builder_surfaces_column_errors() {
    let err = TableController::builder(vec![Column::new("a"), Column::new("a")])
        .build()
        .unwrap_err();
    assert!(matches!(err, GridError::Column(ColumnConfigError::DuplicateId { .. })));
}

#[test]
fn test_initial_page_seeds_state() {
    let grid = TableController::builder(vec![Column::new("a")])
        .config(GridConfig::new().page(3).page_size(5))
        .build()
        .unwrap();
    assert_eq!(grid.state().page_index, 3);
    assert_eq!(grid.state().page_size, 5);
    assert_eq!(grid.record_count(), None);
}
