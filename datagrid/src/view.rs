//! Headless render model.
//!
//! The controller does not draw anything. It hands the rendering layer a
//! [`GridView`] snapshot: plain data describing headers, visible rows and the
//! footer, including the tri-state select-all control as an ordinary value.

use crate::column::{Alignment, Justify};
use crate::pagination::FooterView;
use crate::selection::{CheckState, SelectionControl};
use crate::sort::SortState;

/// Width of the synthetic selection column.
pub const SELECTION_COLUMN_WIDTH: f32 = 56.0;

/// What a header cell shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderContent {
    /// Text label.
    Label(String),
    /// Select-all checkbox (multi-select selection column).
    SelectAll(CheckState),
}

/// One header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    /// Column id.
    pub column_id: String,
    /// Cell content.
    pub content: HeaderContent,
    /// Tooltip on the header (sort hint or declared title).
    pub title: Option<String>,
    /// Tooltip on the resize handle.
    pub resize_title: Option<String>,
    /// Alignment.
    pub align: Alignment,
    /// Flex justification derived from the alignment.
    pub justify: Justify,
    /// Current width.
    pub width: f32,
    /// Header click toggles sorting.
    pub sortable: bool,
    /// Edge can be dragged.
    pub resizable: bool,
    /// Sort state of this column.
    pub sort: SortState,
    /// A drag on this column is in progress.
    pub resizing: bool,
}

/// One body cell.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyCell {
    /// Column id.
    pub column_id: String,
    /// Rendered text.
    pub text: String,
    /// Raw value as text, used as the cell tooltip.
    pub title: String,
    /// Alignment.
    pub align: Alignment,
    /// Current width.
    pub width: f32,
}

/// One visible row.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRow {
    /// Row id.
    pub id: String,
    /// Position within the page.
    pub index: usize,
    /// Selection control for the row.
    pub control: SelectionControl,
    /// Data cells in column order (the selection cell is `control`).
    pub cells: Vec<BodyCell>,
}

impl BodyRow {
    /// Check if the row is selected.
    pub fn is_selected(&self) -> bool {
        self.control.is_checked()
    }
}

/// Full render snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
    /// Compact row density.
    pub dense: bool,
    /// Header cells, selection column first.
    pub header: Vec<HeaderCell>,
    /// Visible rows.
    pub rows: Vec<BodyRow>,
    /// Footer.
    pub footer: FooterView,
}

impl GridView {
    /// Get a header cell by column id.
    pub fn header_cell(&self, column_id: &str) -> Option<&HeaderCell> {
        self.header.iter().find(|h| h.column_id == column_id)
    }

    /// Get a visible row by id.
    pub fn row(&self, id: &str) -> Option<&BodyRow> {
        self.rows.iter().find(|r| r.id == id)
    }
}
