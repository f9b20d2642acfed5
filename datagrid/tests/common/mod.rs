//! Shared fixtures for grid tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use datagrid::prelude::*;
use serde_json::{Value, json};
use simplelog::{Config, LevelFilter, TestLogger};

/// Route library logs to the test harness output.
pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Intents fired by a grid, in order.
#[derive(Clone, Default)]
pub struct Captured {
    pub pages: Rc<RefCell<Vec<PageChange>>>,
    pub sorts: Rc<RefCell<Vec<SortChange>>>,
    pub selects: Rc<RefCell<Vec<RowSelect>>>,
}

impl Captured {
    pub fn pages(&self) -> Vec<PageChange> {
        self.pages.borrow().clone()
    }

    pub fn sorts(&self) -> Vec<SortChange> {
        self.sorts.borrow().clone()
    }

    pub fn selects(&self) -> Vec<RowSelect> {
        self.selects.borrow().clone()
    }

    pub fn total(&self) -> usize {
        self.pages.borrow().len() + self.sorts.borrow().len() + self.selects.borrow().len()
    }
}

/// Handlers that record every intent.
pub fn capture() -> (GridHandlers, Captured) {
    let captured = Captured::default();
    let pages = Rc::clone(&captured.pages);
    let sorts = Rc::clone(&captured.sorts);
    let selects = Rc::clone(&captured.selects);
    let handlers = GridHandlers::new()
        .on_page_change(move |e| pages.borrow_mut().push(*e))
        .on_sort(move |e| sorts.borrow_mut().push(e.clone()))
        .on_row_select(move |e| selects.borrow_mut().push(e.clone()));
    (handlers, captured)
}

/// One bill record.
pub fn bill(n: usize) -> Value {
    json!({
        "bill_number": n,
        "bill_amount": n * 100,
        "bill_date": format!("2024-01-{:02}", n % 28 + 1),
        "bill_status": if n % 2 == 0 { "paid" } else { "open" },
        "customer": { "name": format!("Customer {}", n) },
    })
}

/// Bills `start..end`.
pub fn bills(start: usize, end: usize) -> Vec<Value> {
    (start..end).map(bill).collect()
}

/// The bill columns used across tests.
pub fn bill_columns() -> Vec<Column> {
    vec![
        Column::new("bill_number").header("Bill"),
        Column::new("bill_amount").header_id("amount").align(Alignment::Right),
        Column::new("bill_date").header("Date"),
        Column::new("bill_status").header("Status").disable_sort_by(),
    ]
}

/// A mounted grid over 20 bills, first page loaded.
pub fn bill_grid(config: GridConfig) -> (TableController, Captured) {
    init_logging();
    let (handlers, captured) = capture();
    let page_size = config.page_size;
    let mut grid = TableController::builder(bill_columns())
        .config(config)
        .row_id(RowIdStrategy::key("bill_number"))
        .handlers(handlers)
        .build()
        .expect("valid grid");
    grid.set_data(bills(1, 1 + page_size)).expect("unique ids");
    grid.set_record_count(20);
    (grid, captured)
}
