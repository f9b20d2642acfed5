//! Row selection coordinator.
//!
//! Selection is keyed by row id, so it survives data replacement. Ids that
//! are no longer on the current page stay selected; they simply have no
//! control to show them.

use log::{debug, warn};

use crate::events::{EventResult, GridHandlers, RowSelect};
use crate::state::{TableEngine, TableState};

/// Selection mode, fixed for a grid's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// One row at a time (radio-button style).
    Single,
    /// Any number of rows (checkbox style).
    #[default]
    Multi,
}

/// Tri-state for the select-all control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Control shown in a row's selection cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionControl {
    Radio { checked: bool },
    Checkbox { checked: bool },
}

impl SelectionControl {
    /// Check if the control is on.
    pub fn is_checked(&self) -> bool {
        match self {
            SelectionControl::Radio { checked } | SelectionControl::Checkbox { checked } => {
                *checked
            }
        }
    }
}

/// Compute the select-all state over the visible rows.
pub fn check_state<'a, I>(visible_ids: I, state: &TableState) -> CheckState
where
    I: IntoIterator<Item = &'a str>,
{
    let mut total = 0;
    let mut selected = 0;
    for id in visible_ids {
        total += 1;
        if state.is_selected(id) {
            selected += 1;
        }
    }
    if selected == 0 {
        CheckState::Unchecked
    } else if selected == total {
        CheckState::Checked
    } else {
        CheckState::Indeterminate
    }
}

/// Applies the selection protocol for one [`SelectionMode`].
#[derive(Debug, Clone, Copy)]
pub struct SelectionCoordinator {
    mode: SelectionMode,
}

impl SelectionCoordinator {
    /// Create a coordinator.
    pub fn new(mode: SelectionMode) -> Self {
        Self { mode }
    }

    /// Get the mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Control for a row's selection cell.
    pub fn row_control(&self, id: &str, state: &TableState) -> SelectionControl {
        let checked = state.is_selected(id);
        match self.mode {
            SelectionMode::Single => SelectionControl::Radio { checked },
            SelectionMode::Multi => SelectionControl::Checkbox { checked },
        }
    }

    /// Handle a click on a row's selection control.
    ///
    /// Single mode replaces the selection with `{id}`; re-selecting the only
    /// selected row is a no-op. Multi mode toggles membership.
    pub fn toggle_row_selected(
        &self,
        id: &str,
        engine: &mut TableEngine,
        handlers: &mut GridHandlers,
    ) -> EventResult {
        let changed = match self.mode {
            SelectionMode::Single => engine.set_selected_row_ids([id.to_string()]),
            SelectionMode::Multi => engine.toggle_row_selected(id),
        };
        if !changed {
            debug!("[selection] '{}' already selected", id);
            return EventResult::Ignored;
        }
        debug!("[selection] toggled '{}' ({:?})", id, self.mode);
        self.notify(engine, handlers);
        EventResult::Consumed
    }

    /// Add every visible row to the selection, or remove every visible row
    /// from it. Rows on other pages are untouched.
    ///
    /// Selecting all is not offered in single mode.
    pub fn toggle_all_rows_selected<'a, I>(
        &self,
        selected: bool,
        visible_ids: I,
        engine: &mut TableEngine,
        handlers: &mut GridHandlers,
    ) -> EventResult
    where
        I: IntoIterator<Item = &'a str>,
    {
        if selected && self.mode == SelectionMode::Single {
            warn!("[selection] select all is not available in single mode");
            return EventResult::Ignored;
        }
        if !engine.toggle_all_rows_selected(visible_ids, selected) {
            return EventResult::Ignored;
        }
        debug!("[selection] all visible rows selected = {}", selected);
        self.notify(engine, handlers);
        EventResult::Consumed
    }

    /// Handle a click on the select-all control: a fully checked page is
    /// cleared, anything else is filled.
    pub fn toggle_all<'a, I>(
        &self,
        visible_ids: I,
        engine: &mut TableEngine,
        handlers: &mut GridHandlers,
    ) -> EventResult
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        let all_checked = check_state(visible_ids.clone(), engine.state()) == CheckState::Checked;
        self.toggle_all_rows_selected(!all_checked, visible_ids, engine, handlers)
    }

    fn notify(&self, engine: &TableEngine, handlers: &mut GridHandlers) {
        handlers.emit_row_select(RowSelect {
            selected_ids: engine.state().selected_ids(),
        });
    }
}
