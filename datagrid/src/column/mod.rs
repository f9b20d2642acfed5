//! Column declarations and their normalized descriptors.
//!
//! Hosts declare columns with [`Column`]; [`ColumnModel::build`] turns the
//! list into immutable [`ColumnDescriptor`]s once, at mount.
//!
//! # Example
//!
//! ```
//! use datagrid::column::{Alignment, Column, ColumnModel};
//! use datagrid::labels::IdentityLabels;
//!
//! let columns = vec![
//!     Column::new("bill_number").header("Bill"),
//!     Column::new("bill_amount").header_id("amount").align(Alignment::Right),
//!     Column::new("bill_status").disable_sort_by(),
//! ];
//! let model = ColumnModel::build(columns, true, &IdentityLabels).unwrap();
//! assert_eq!(model.len(), 3);
//! assert_eq!(model.get("bill_amount").unwrap().header, "amount");
//! ```

mod builder;

pub use builder::{ColumnModel, DEFAULT_MIN_WIDTH, DEFAULT_WIDTH, SELECTION_COLUMN_ID};

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::row::{resolve_path, value_text};

/// Horizontal alignment for header and body cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Flex justification used to place header content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Start,
    Center,
    End,
}

impl Alignment {
    /// Map the alignment onto a flex justification.
    pub fn justify(self) -> Justify {
        match self {
            Alignment::Right => Justify::End,
            Alignment::Center => Justify::Center,
            Alignment::Left => Justify::Start,
        }
    }
}

/// Function form of an accessor: `(record, row_index)`.
pub type AccessorFn = Arc<dyn Fn(&Value, usize) -> Value + Send + Sync>;

/// How a column reads its value from a record.
#[derive(Clone)]
pub enum Accessor {
    /// Dotted lookup on the record.
    Path(String),
    /// Computed from the record.
    Func(AccessorFn),
}

impl Accessor {
    /// Resolve the value for a record. Missing paths yield `Value::Null`.
    pub fn resolve(&self, record: &Value, row_index: usize) -> Value {
        match self {
            Accessor::Path(path) => resolve_path(record, path).cloned().unwrap_or(Value::Null),
            Accessor::Func(f) => f(record, row_index),
        }
    }

    /// The path, if this is a path accessor.
    pub fn path(&self) -> Option<&str> {
        match self {
            Accessor::Path(path) => Some(path),
            Accessor::Func(_) => None,
        }
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Accessor::Func(_) => f.write_str("Func(..)"),
        }
    }
}

/// Where a column header comes from.
#[derive(Clone)]
pub enum HeaderSource {
    /// Used verbatim.
    Literal(String),
    /// Resolved through the label lookup.
    LocalizedId(String),
    /// Computed once at build time.
    Computed(Arc<dyn Fn() -> String + Send + Sync>),
}

impl fmt::Debug for HeaderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderSource::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            HeaderSource::LocalizedId(s) => f.debug_tuple("LocalizedId").field(s).finish(),
            HeaderSource::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Custom cell renderer: `(value, record) -> text`.
pub type CellRenderer = Arc<dyn Fn(&Value, &Value) -> String + Send + Sync>;

/// Column declaration.
///
/// Mirrors the host-facing column schema: accessor, header (literal,
/// localized id or computed), title id, custom cell, sort and resize
/// opt-outs, width bounds and alignment.
#[derive(Clone)]
pub struct Column {
    /// Explicit id. Defaults to the accessor path.
    pub id: Option<String>,
    /// Value accessor.
    pub accessor: Accessor,
    /// Header source.
    pub header: Option<HeaderSource>,
    /// Message id for the header tooltip.
    pub title_id: Option<String>,
    /// Custom cell renderer.
    pub cell: Option<CellRenderer>,
    /// Opt out of sorting.
    pub disable_sort_by: bool,
    /// Opt out of resizing.
    pub disable_resizing: bool,
    /// Initial width.
    pub width: Option<f32>,
    /// Minimum width.
    pub min_width: Option<f32>,
    /// Maximum width.
    pub max_width: Option<f32>,
    /// Alignment.
    pub align: Alignment,
}

impl Column {
    /// Declare a column reading the given dotted path.
    pub fn new(accessor: impl Into<String>) -> Self {
        Self::with_accessor(Accessor::Path(accessor.into()))
    }

    /// Declare a computed column. Computed columns need an explicit id.
    pub fn computed<F>(id: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value, usize) -> Value + Send + Sync + 'static,
    {
        let mut column = Self::with_accessor(Accessor::Func(Arc::new(f)));
        column.id = Some(id.into());
        column
    }

    fn with_accessor(accessor: Accessor) -> Self {
        Self {
            id: None,
            accessor,
            header: None,
            title_id: None,
            cell: None,
            disable_sort_by: false,
            disable_resizing: false,
            width: None,
            min_width: None,
            max_width: None,
            align: Alignment::Left,
        }
    }

    /// Set an explicit id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Use a literal header.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(HeaderSource::Literal(header.into()));
        self
    }

    /// Use a localized header.
    pub fn header_id(mut self, id: impl Into<String>) -> Self {
        self.header = Some(HeaderSource::LocalizedId(id.into()));
        self
    }

    /// Use a computed header.
    pub fn header_with<F>(mut self, f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.header = Some(HeaderSource::Computed(Arc::new(f)));
        self
    }

    /// Set the tooltip message id.
    pub fn title_id(mut self, id: impl Into<String>) -> Self {
        self.title_id = Some(id.into());
        self
    }

    /// Set a custom cell renderer.
    pub fn cell<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, &Value) -> String + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(f));
        self
    }

    /// Exclude this column from sorting.
    pub fn disable_sort_by(mut self) -> Self {
        self.disable_sort_by = true;
        self
    }

    /// Exclude this column from resizing.
    pub fn disable_resizing(mut self) -> Self {
        self.disable_resizing = true;
        self
    }

    /// Set the initial width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the minimum width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Set the maximum width.
    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set the alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("accessor", &self.accessor)
            .field("header", &self.header)
            .field("title_id", &self.title_id)
            .field("disable_sort_by", &self.disable_sort_by)
            .field("disable_resizing", &self.disable_resizing)
            .field("width", &self.width)
            .field("min_width", &self.min_width)
            .field("max_width", &self.max_width)
            .field("align", &self.align)
            .finish_non_exhaustive()
    }
}

/// Normalized, immutable column.
#[derive(Clone)]
pub struct ColumnDescriptor {
    /// Unique id.
    pub id: String,
    /// Value accessor.
    pub accessor: Accessor,
    /// Resolved header text.
    pub header: String,
    /// Resolved tooltip text, if a title id was declared.
    pub title: Option<String>,
    /// Custom cell renderer.
    pub cell: Option<CellRenderer>,
    /// Whether header clicks toggle sorting.
    pub sortable: bool,
    /// Whether the column edge can be dragged.
    pub resizable: bool,
    /// Initial width, already inside the bounds.
    pub width: f32,
    /// Lower width bound.
    pub min_width: f32,
    /// Upper width bound, `None` for unbounded.
    pub max_width: Option<f32>,
    /// Alignment.
    pub align: Alignment,
}

impl ColumnDescriptor {
    /// Clamp a width into this column's bounds.
    pub fn clamp_width(&self, width: f32) -> f32 {
        let width = width.max(self.min_width);
        match self.max_width {
            Some(max) => width.min(max),
            None => width,
        }
    }

    /// Render a cell value as text, through the custom renderer if any.
    pub fn render(&self, value: &Value, record: &Value) -> String {
        match &self.cell {
            Some(render) => render(value, record),
            None => value_text(value),
        }
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("id", &self.id)
            .field("accessor", &self.accessor)
            .field("header", &self.header)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("resizable", &self.resizable)
            .field("width", &self.width)
            .field("min_width", &self.min_width)
            .field("max_width", &self.max_width)
            .field("align", &self.align)
            .finish_non_exhaustive()
    }
}
