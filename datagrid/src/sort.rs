//! Sort toggle protocol.
//!
//! Single-column, no removal: the active column cycles `Asc -> Desc -> Asc`
//! and never returns to unsorted. Engaging another column clears the
//! previous one and starts it at `Asc`. Every toggle re-anchors to the first
//! page. The grid never reorders data; the host does, on refetch.

use std::fmt;

use log::{debug, warn};

use crate::column::ColumnModel;
use crate::events::{EventResult, GridHandlers, SortChange};
use crate::state::{SortBy, TableEngine};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Direction from the engine's `descending` flag.
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    /// Wire name, `"asc"` or `"desc"`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-column sort state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortState {
    Unsorted,
    Asc,
    Desc,
}

impl SortState {
    /// Sort state of `column_id` given the active sort.
    pub fn of(column_id: &str, sort_by: Option<&SortBy>) -> Self {
        match sort_by {
            Some(s) if s.column_id == column_id && s.descending => SortState::Desc,
            Some(s) if s.column_id == column_id => SortState::Asc,
            _ => SortState::Unsorted,
        }
    }

    /// Next state on toggle. `Unsorted` is never re-entered.
    pub fn next(self) -> Self {
        match self {
            SortState::Unsorted | SortState::Desc => SortState::Asc,
            SortState::Asc => SortState::Desc,
        }
    }
}

/// Toggle sorting on a column.
///
/// Non-sortable and unknown columns are ignored. Otherwise the engine is
/// updated, the page reset to 0 and `on_sort` fired.
pub fn toggle_sort(
    column_id: &str,
    columns: &ColumnModel,
    engine: &mut TableEngine,
    handlers: &mut GridHandlers,
) -> EventResult {
    let Some(column) = columns.get(column_id) else {
        warn!("[sort] unknown column '{}'", column_id);
        return EventResult::Ignored;
    };
    if !column.sortable {
        warn!("[sort] column '{}' is not sortable", column_id);
        return EventResult::Ignored;
    }

    let next = SortState::of(column_id, engine.state().sort_by.as_ref()).next();
    let descending = next == SortState::Desc;
    debug!("[sort] '{}' -> {:?}", column_id, next);

    engine.toggle_sort_by(column_id, descending);
    engine.goto_page(0);

    handlers.emit_sort(SortChange {
        sort_by: column_id.to_string(),
        direction: SortDirection::from_descending(descending),
        page: 0,
        page_size: engine.page_size(),
    });
    EventResult::Consumed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_never_unsorts() {
        let mut state = SortState::Unsorted;
        let mut seen = Vec::new();
        for _ in 0..5 {
            state = state.next();
            seen.push(state);
        }
        assert_eq!(
            seen,
            vec![
                SortState::Asc,
                SortState::Desc,
                SortState::Asc,
                SortState::Desc,
                SortState::Asc
            ]
        );
    }

    #[test]
    fn test_state_of_other_column_is_unsorted() {
        let sort = SortBy {
            column_id: "a".into(),
            descending: true,
        };
        assert_eq!(SortState::of("a", Some(&sort)), SortState::Desc);
        assert_eq!(SortState::of("b", Some(&sort)), SortState::Unsorted);
        assert_eq!(SortState::of("b", None), SortState::Unsorted);
    }
}
