//! Rows of the current page and their identity.
//!
//! Rows are keyed by a stable string id rather than by position, so
//! selection survives data replacement as long as the ids persist.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::column::ColumnDescriptor;
use crate::error::RowIdentityError;

/// Resolve a dotted path (`"customer.address.city"`) against a record.
///
/// Numeric segments index into arrays. Missing segments resolve to `None`;
/// this never fails.
pub fn resolve_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    path.split('.').try_fold(record, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Render a cell value as plain text. `null` and missing values are blank.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Function form of the row-id strategy: `(record, relative_index, parent)`.
pub type RowIdFn = Arc<dyn Fn(&Value, usize, Option<&Row>) -> Option<String> + Send + Sync>;

/// How a row derives its id.
#[derive(Clone)]
pub enum RowIdStrategy {
    /// Dotted key path into the record.
    Key(String),
    /// Custom derivation.
    Func(RowIdFn),
}

impl RowIdStrategy {
    /// Use a key path.
    pub fn key(path: impl Into<String>) -> Self {
        Self::Key(path.into())
    }

    /// Use a function.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&Value, usize, Option<&Row>) -> Option<String> + Send + Sync + 'static,
    {
        Self::Func(Arc::new(f))
    }

    /// Derive the id for one record. Empty, null and composite values are
    /// rejected.
    pub fn row_id(
        &self,
        record: &Value,
        index: usize,
        parent: Option<&Row>,
    ) -> Result<String, RowIdentityError> {
        let id = match self {
            Self::Key(path) => match resolve_path(record, path) {
                Some(Value::String(s)) => Some(s.clone()),
                Some(v @ (Value::Number(_) | Value::Bool(_))) => Some(v.to_string()),
                _ => None,
            },
            Self::Func(f) => f(record, index, parent),
        };
        match id {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(RowIdentityError::Missing { index }),
        }
    }
}

impl Default for RowIdStrategy {
    fn default() -> Self {
        Self::Key("id".to_string())
    }
}

impl fmt::Debug for RowIdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(path) => f.debug_tuple("Key").field(path).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

/// A resolved cell: the column it belongs to and the accessor's value.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Owning column id.
    pub column_id: String,
    /// Accessor result, `Value::Null` when the path is missing.
    pub value: Value,
}

/// One row of the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Stable row id.
    pub id: String,
    /// Position within the current page.
    pub index: usize,
    /// The record as supplied by the host.
    pub original: Value,
    /// Cells in column order.
    pub cells: Vec<Cell>,
}

impl Row {
    /// Get the cell for a column.
    pub fn cell(&self, column_id: &str) -> Option<&Cell> {
        self.cells.iter().find(|c| c.column_id == column_id)
    }

    /// Get the resolved value for a column.
    pub fn value(&self, column_id: &str) -> Option<&Value> {
        self.cell(column_id).map(|c| &c.value)
    }
}

/// Build rows for the current page.
///
/// Fails if any row lacks an id or two rows share one.
pub fn build_rows(
    data: Vec<Value>,
    columns: &[ColumnDescriptor],
    strategy: &RowIdStrategy,
) -> Result<Vec<Row>, RowIdentityError> {
    let mut seen = HashSet::with_capacity(data.len());
    let mut rows = Vec::with_capacity(data.len());

    for (index, original) in data.into_iter().enumerate() {
        let id = strategy.row_id(&original, index, None)?;
        if !seen.insert(id.clone()) {
            return Err(RowIdentityError::Duplicate { id });
        }
        let cells = columns
            .iter()
            .map(|column| Cell {
                column_id: column.id.clone(),
                value: column.accessor.resolve(&original, index),
            })
            .collect();
        rows.push(Row {
            id,
            index,
            original,
            cells,
        });
    }

    Ok(rows)
}
