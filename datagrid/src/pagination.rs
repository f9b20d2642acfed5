//! Pagination footer controller.
//!
//! Every navigation action updates the engine *and* emits `on_page_change`
//! in the same step. The engine's page is optimistic; the host's refetch is
//! what supplies the new rows.

use log::{debug, warn};

use crate::events::{EventResult, GridHandlers, PageChange};
use crate::labels::{self, LabelLookup};
use crate::state::TableEngine;

/// `ceil(record_count / page_size)`. A zero page size yields zero pages.
pub fn page_count(record_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    record_count.div_ceil(page_size)
}

/// Footer navigation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    First,
    Previous,
    Next,
    Last,
}

/// A choice in the page selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOption {
    /// Page index, 0-based.
    pub index: usize,
    /// Display label, 1-based.
    pub label: String,
}

/// Render data for the footer.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterView {
    /// Page sizes offered.
    pub rows_per_page_options: Vec<usize>,
    /// Current page size.
    pub page_size: usize,
    /// Current page index.
    pub page_index: usize,
    /// Total number of pages.
    pub page_count: usize,
    /// `"Total record(s): <n>"`.
    pub total_label: String,
    /// Label next to the page selector.
    pub page_label: String,
    /// Selectable pages.
    pub page_options: Vec<PageOption>,
    /// First-page button enabled.
    pub can_first: bool,
    /// Previous-page button enabled.
    pub can_previous: bool,
    /// Next-page button enabled.
    pub can_next: bool,
    /// Last-page button enabled.
    pub can_last: bool,
    /// Page-size selector and page selector enabled.
    pub inputs_enabled: bool,
}

/// Footer state and navigation.
#[derive(Debug, Clone)]
pub struct PaginationFooter {
    record_count: Option<usize>,
    rows_per_page_options: Vec<usize>,
    disabled: bool,
}

impl PaginationFooter {
    /// Create a footer.
    pub fn new(rows_per_page_options: Vec<usize>, disabled: bool) -> Self {
        Self {
            record_count: None,
            rows_per_page_options,
            disabled,
        }
    }

    /// Total record count, if known.
    pub fn record_count(&self) -> Option<usize> {
        self.record_count
    }

    /// Replace the record count and re-clamp the engine's page.
    pub fn set_record_count(&mut self, record_count: usize, engine: &mut TableEngine) -> bool {
        self.record_count = Some(record_count);
        self.refresh_page_count(engine)
    }

    /// Recompute the engine's page count from the record count.
    pub(crate) fn refresh_page_count(&self, engine: &mut TableEngine) -> bool {
        let count = self
            .record_count
            .map(|records| page_count(records, engine.page_size()));
        engine.set_page_count(count)
    }

    /// Total number of pages. Zero until the record count is known.
    pub fn page_count(&self, engine: &TableEngine) -> usize {
        self.record_count
            .map(|records| page_count(records, engine.page_size()))
            .unwrap_or(0)
    }

    /// Page sizes offered.
    pub fn rows_per_page_options(&self) -> &[usize] {
        &self.rows_per_page_options
    }

    /// Previous/first are available.
    pub fn can_previous(&self, engine: &TableEngine) -> bool {
        !self.disabled && engine.page_index() > 0
    }

    /// Next/last are available.
    pub fn can_next(&self, engine: &TableEngine) -> bool {
        !self.disabled && engine.page_index() < self.page_count(engine).saturating_sub(1)
    }

    /// Run a navigation action.
    pub fn navigate(
        &self,
        action: PageAction,
        engine: &mut TableEngine,
        handlers: &mut GridHandlers,
    ) -> EventResult {
        if self.disabled {
            warn!("[pagination] {:?} while input is disabled", action);
            return EventResult::Ignored;
        }
        let target = match action {
            PageAction::First | PageAction::Previous if !self.can_previous(engine) => None,
            PageAction::Next | PageAction::Last if !self.can_next(engine) => None,
            PageAction::First => Some(0),
            PageAction::Previous => Some(engine.page_index() - 1),
            PageAction::Next => Some(engine.page_index() + 1),
            PageAction::Last => Some(self.page_count(engine) - 1),
        };
        let Some(target) = target else {
            debug!("[pagination] {:?} not available", action);
            return EventResult::Ignored;
        };
        self.goto(target, engine, handlers)
    }

    /// Jump to a page chosen from the page selector.
    pub fn select_page(
        &self,
        page: usize,
        engine: &mut TableEngine,
        handlers: &mut GridHandlers,
    ) -> EventResult {
        if self.disabled {
            warn!("[pagination] page selection while input is disabled");
            return EventResult::Ignored;
        }
        self.goto(page, engine, handlers)
    }

    fn goto(
        &self,
        page: usize,
        engine: &mut TableEngine,
        handlers: &mut GridHandlers,
    ) -> EventResult {
        if !engine.goto_page(page) {
            return EventResult::Ignored;
        }
        handlers.emit_page_change(PageChange {
            page: engine.page_index(),
            page_size: engine.page_size(),
        });
        EventResult::Consumed
    }

    /// Change the page size and re-anchor to the first page.
    pub fn change_page_size(
        &self,
        page_size: usize,
        engine: &mut TableEngine,
        handlers: &mut GridHandlers,
    ) -> EventResult {
        if self.disabled {
            warn!("[pagination] page size change while input is disabled");
            return EventResult::Ignored;
        }
        if page_size == 0 || page_size == engine.page_size() {
            return EventResult::Ignored;
        }
        engine.set_page_size(page_size);
        engine.goto_page(0);
        self.refresh_page_count(engine);
        handlers.emit_page_change(PageChange { page: 0, page_size });
        EventResult::Consumed
    }

    /// Build the footer render data.
    pub fn view(&self, engine: &TableEngine, lookup: &dyn LabelLookup) -> FooterView {
        let page_count = self.page_count(engine);
        let can_previous = self.can_previous(engine);
        let can_next = self.can_next(engine);
        FooterView {
            rows_per_page_options: self.rows_per_page_options.clone(),
            page_size: engine.page_size(),
            page_index: engine.page_index(),
            page_count,
            total_label: format!("Total record(s): {}", self.record_count.unwrap_or(0)),
            page_label: lookup.label(labels::PAGE),
            page_options: (0..page_count)
                .map(|index| PageOption {
                    index,
                    label: (index + 1).to_string(),
                })
                .collect(),
            can_first: can_previous,
            can_previous,
            can_next,
            can_last: can_next,
            inputs_enabled: !self.disabled,
        }
    }
}
