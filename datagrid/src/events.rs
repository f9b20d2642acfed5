//! Outbound intent events and host callbacks.
//!
//! Callbacks are the only way the grid talks to its host. Each one describes
//! the *requested* next state; the host refetches and hands back new data.

use std::fmt;

use log::debug;

use crate::sort::SortDirection;

// =============================================================================
// Intent Types
// =============================================================================

/// Requested page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    /// Requested page, 0-based.
    pub page: usize,
    /// Requested page size.
    pub page_size: usize,
}

/// Requested sort change. Always anchored to the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortChange {
    /// Sorted column id.
    pub sort_by: String,
    /// Sort direction.
    pub direction: SortDirection,
    /// Always 0.
    pub page: usize,
    /// Current page size.
    pub page_size: usize,
}

/// Selection changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSelect {
    /// Every currently selected id: integer ids ascending, then the rest
    /// in selection order.
    pub selected_ids: Vec<String>,
}

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling a user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The interaction was not applicable (disabled control, unknown column).
    Ignored,
    /// The interaction was applied.
    Consumed,
}

impl EventResult {
    /// Check if the interaction was applied.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

// =============================================================================
// Handlers
// =============================================================================

type Handler<E> = Box<dyn FnMut(&E)>;

/// Host callbacks.
///
/// ```
/// use datagrid::events::GridHandlers;
///
/// let handlers = GridHandlers::new()
///     .on_page_change(|e| println!("page {} size {}", e.page, e.page_size))
///     .on_sort(|e| println!("sort {} {}", e.sort_by, e.direction));
/// ```
#[derive(Default)]
pub struct GridHandlers {
    on_page_change: Option<Handler<PageChange>>,
    on_sort: Option<Handler<SortChange>>,
    on_row_select: Option<Handler<RowSelect>>,
}

impl GridHandlers {
    /// Create handlers that ignore every event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page-change callback.
    pub fn on_page_change(mut self, f: impl FnMut(&PageChange) + 'static) -> Self {
        self.on_page_change = Some(Box::new(f));
        self
    }

    /// Set the sort callback.
    pub fn on_sort(mut self, f: impl FnMut(&SortChange) + 'static) -> Self {
        self.on_sort = Some(Box::new(f));
        self
    }

    /// Set the row-selection callback.
    pub fn on_row_select(mut self, f: impl FnMut(&RowSelect) + 'static) -> Self {
        self.on_row_select = Some(Box::new(f));
        self
    }

    pub(crate) fn emit_page_change(&mut self, event: PageChange) {
        debug!("[events] page change {:?}", event);
        if let Some(f) = self.on_page_change.as_mut() {
            f(&event);
        }
    }

    pub(crate) fn emit_sort(&mut self, event: SortChange) {
        debug!("[events] sort {:?}", event);
        if let Some(f) = self.on_sort.as_mut() {
            f(&event);
        }
    }

    pub(crate) fn emit_row_select(&mut self, event: RowSelect) {
        debug!("[events] row select {:?}", event);
        if let Some(f) = self.on_row_select.as_mut() {
            f(&event);
        }
    }
}

impl fmt::Debug for GridHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridHandlers")
            .field("on_page_change", &self.on_page_change.is_some())
            .field("on_sort", &self.on_sort.is_some())
            .field("on_row_select", &self.on_row_select.is_some())
            .finish()
    }
}
