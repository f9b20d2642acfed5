//! In-memory bill server with server-side sorting and paging.

use std::cmp::Ordering;

use datagrid::prelude::SortDirection;
use log::debug;
use serde_json::{Value, json};

/// One fetch request.
#[derive(Debug, Clone)]
pub struct Query {
    /// Sort field and direction.
    pub sort: Option<(String, SortDirection)>,
    /// Page, 0-based.
    pub page: usize,
    /// Page size.
    pub limit: usize,
}

/// One page of results.
#[derive(Debug, Clone)]
pub struct Page {
    pub rows: Vec<Value>,
    pub total: usize,
}

/// Holds every bill and answers paged queries.
#[derive(Debug, Clone)]
pub struct BillServer {
    bills: Vec<Value>,
}

impl BillServer {
    /// Create a server with `count` generated bills.
    pub fn with_bills(count: usize) -> Self {
        let bills = (1..=count)
            .map(|n| {
                json!({
                    "bill_number": n,
                    "bill_amount": ((n * 7919) % 1000) as f64 + 0.5,
                    "bill_date": format!("2021-03-{:02}", n),
                    "bill_status": if n % 3 == 0 { "paid" } else { "due" },
                })
            })
            .collect();
        Self { bills }
    }

    /// Run a query.
    pub fn fetch(&self, query: &Query) -> Page {
        let mut rows = self.bills.clone();
        if let Some((field, direction)) = &query.sort {
            rows.sort_by(|a, b| {
                let ord = compare(&a[field.as_str()], &b[field.as_str()]);
                match direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        let start = query.page.saturating_mul(query.limit).min(rows.len());
        let end = (start + query.limit).min(rows.len());
        debug!(
            "[server] sort {:?} page {} limit {} -> rows {}..{}",
            query.sort, query.page, query.limit, start, end
        );
        Page {
            rows: rows[start..end].to_vec(),
            total: self.bills.len(),
        }
    }
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .unwrap_or(0.0)
            .total_cmp(&y.as_f64().unwrap_or(0.0)),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}
