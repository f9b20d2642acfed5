//! Table state engine.
//!
//! [`TableEngine`] is the single owner of [`TableState`]. Every other
//! component reads the current snapshot and requests changes through the
//! engine's operations; none of them mutate the state directly.
//!
//! Operations are synchronous and total. Out-of-range requests are clamped,
//! never rejected. Each returns whether the snapshot actually changed.

use std::collections::{HashMap, HashSet};

use log::debug;

/// The active sort, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBy {
    /// Sorted column.
    pub column_id: String,
    /// Descending when true.
    pub descending: bool,
}

/// Snapshot of the grid's interaction state.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    /// Current page, 0-based.
    pub page_index: usize,
    /// Rows per page, always positive.
    pub page_size: usize,
    /// At most one sorted column.
    pub sort_by: Option<SortBy>,
    /// Selected row ids. May include ids not on the current page.
    pub selected_row_ids: HashSet<String>,
    /// Committed column widths.
    pub column_widths: HashMap<String, f32>,
    /// Selected ids in the order they were added.
    selection_order: Vec<String>,
}

impl TableState {
    /// Create the initial snapshot.
    pub fn new(page_index: usize, page_size: usize, selected: &[String]) -> Self {
        let mut state = Self {
            page_index,
            page_size: page_size.max(1),
            sort_by: None,
            selected_row_ids: HashSet::with_capacity(selected.len()),
            column_widths: HashMap::new(),
            selection_order: Vec::with_capacity(selected.len()),
        };
        for id in selected {
            state.insert_selected(id);
        }
        state
    }

    /// Selected ids in key order: integer ids ascending, then every other
    /// id in the order it was selected.
    pub fn selected_ids(&self) -> Vec<String> {
        let mut numeric: Vec<(u64, &String)> = Vec::new();
        let mut named: Vec<&String> = Vec::new();
        for id in &self.selection_order {
            match integer_key(id) {
                Some(n) => numeric.push((n, id)),
                None => named.push(id),
            }
        }
        numeric.sort_by_key(|(n, _)| *n);
        numeric
            .into_iter()
            .map(|(_, id)| id)
            .chain(named)
            .cloned()
            .collect()
    }

    fn insert_selected(&mut self, id: &str) -> bool {
        if !self.selected_row_ids.insert(id.to_string()) {
            return false;
        }
        self.selection_order.push(id.to_string());
        true
    }

    fn remove_selected(&mut self, id: &str) -> bool {
        if !self.selected_row_ids.remove(id) {
            return false;
        }
        self.selection_order.retain(|s| s != id);
        true
    }

    /// Check if a row id is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_row_ids.contains(id)
    }
}

/// Parse ids in canonical integer form (`"0"`, `"42"`, not `"042"`).
fn integer_key(id: &str) -> Option<u64> {
    if id.len() > 1 && id.starts_with('0') {
        return None;
    }
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}

/// Owner of [`TableState`].
#[derive(Debug, Clone)]
pub struct TableEngine {
    state: TableState,
    /// Known page count. `None` until a record count is supplied.
    page_count: Option<usize>,
    /// Set whenever the snapshot changes.
    dirty: bool,
}

impl TableEngine {
    /// Create an engine seeded with initial values.
    pub fn new(state: TableState) -> Self {
        Self {
            state,
            page_count: None,
            dirty: false,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Current page index.
    pub fn page_index(&self) -> usize {
        self.state.page_index
    }

    /// Current page size.
    pub fn page_size(&self) -> usize {
        self.state.page_size
    }

    /// Known page count.
    pub fn page_count(&self) -> Option<usize> {
        self.page_count
    }

    /// Update the known page count and re-clamp the page index.
    pub fn set_page_count(&mut self, page_count: Option<usize>) -> bool {
        self.page_count = page_count;
        let clamped = self.clamp_page(self.state.page_index);
        if clamped != self.state.page_index {
            debug!(
                "[engine] page {} out of range for {:?} pages, clamped to {}",
                self.state.page_index, page_count, clamped
            );
            self.replace(|s| s.page_index = clamped);
            return true;
        }
        false
    }

    fn clamp_page(&self, page: usize) -> usize {
        match self.page_count {
            Some(count) => page.min(count.saturating_sub(1)),
            None => page,
        }
    }

    fn replace(&mut self, f: impl FnOnce(&mut TableState)) {
        let mut next = self.state.clone();
        f(&mut next);
        if next != self.state {
            self.state = next;
            self.dirty = true;
        }
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Go to a page, clamped into `[0, page_count - 1]` when the count is known.
    pub fn goto_page(&mut self, page: usize) -> bool {
        let clamped = self.clamp_page(page);
        if clamped != page {
            debug!("[engine] goto_page({}) clamped to {}", page, clamped);
        }
        if clamped == self.state.page_index {
            return false;
        }
        debug!("[engine] page {} -> {}", self.state.page_index, clamped);
        self.replace(|s| s.page_index = clamped);
        true
    }

    /// Set the page size. A zero size is raised to one.
    ///
    /// Does not touch the page index; callers reset it when their policy
    /// requires.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        let page_size = page_size.max(1);
        if page_size == self.state.page_size {
            return false;
        }
        debug!("[engine] page size {} -> {}", self.state.page_size, page_size);
        self.replace(|s| s.page_size = page_size);
        true
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Make `column_id` the single sorted column.
    pub fn toggle_sort_by(&mut self, column_id: &str, descending: bool) -> bool {
        let next = SortBy {
            column_id: column_id.to_string(),
            descending,
        };
        if self.state.sort_by.as_ref() == Some(&next) {
            return false;
        }
        debug!("[engine] sort by {:?}", next);
        self.replace(|s| s.sort_by = Some(next));
        true
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle membership of a row id.
    pub fn toggle_row_selected(&mut self, id: &str) -> bool {
        let selected = self.state.selected_row_ids.contains(id);
        self.set_row_selected(id, !selected)
    }

    /// Set membership of a row id.
    pub fn set_row_selected(&mut self, id: &str, selected: bool) -> bool {
        if self.state.selected_row_ids.contains(id) == selected {
            return false;
        }
        self.replace(|s| {
            if selected {
                s.insert_selected(id);
            } else {
                s.remove_selected(id);
            }
        });
        true
    }

    /// Add or remove every id in `row_ids`. Ids outside the list are kept.
    pub fn toggle_all_rows_selected<'a, I>(&mut self, row_ids: I, selected: bool) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let before = self.state.selected_row_ids.len();
        self.replace(|s| {
            for id in row_ids {
                if selected {
                    s.insert_selected(id);
                } else {
                    s.remove_selected(id);
                }
            }
        });
        before != self.state.selected_row_ids.len()
    }

    /// Replace the whole selection. Ids keep the iteration order.
    pub fn set_selected_row_ids<I>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = String>,
    {
        let mut next: Vec<String> = Vec::new();
        for id in ids {
            if !next.contains(&id) {
                next.push(id);
            }
        }
        if next.len() == self.state.selected_row_ids.len()
            && next.iter().all(|id| self.state.is_selected(id))
        {
            return false;
        }
        self.replace(|s| {
            s.selected_row_ids = next.iter().cloned().collect();
            s.selection_order = next;
        });
        true
    }

    // -------------------------------------------------------------------------
    // Column widths
    // -------------------------------------------------------------------------

    /// Set a committed column width. Bounds are enforced by the caller.
    pub fn set_column_width(&mut self, column_id: &str, width: f32) -> bool {
        if self.state.column_widths.get(column_id) == Some(&width) {
            return false;
        }
        // In place: called on every pointer move.
        self.state
            .column_widths
            .insert(column_id.to_string(), width);
        self.dirty = true;
        true
    }

    /// Committed width for a column, if any.
    pub fn column_width(&self, column_id: &str) -> Option<f32> {
        self.state.column_widths.get(column_id).copied()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the state changed since the last clear.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
