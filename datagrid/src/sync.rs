//! Controlled-props synchronizer.
//!
//! The host owns `page` and `page_size`; the engine only mirrors them. On
//! every render the host values are compared with the engine and pushed in
//! only when they differ. Nothing here emits a callback: absorbing a value
//! the grid itself requested must not echo back to the host.

use log::debug;

use crate::state::TableEngine;

/// Host-supplied controlled values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlledProps {
    /// Page index, 0-based.
    pub page: usize,
    /// Page size.
    pub page_size: usize,
}

/// What a sync pass pushed into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncOutcome {
    /// `goto_page` was called.
    pub page_pushed: bool,
    /// `set_page_size` was called.
    pub page_size_pushed: bool,
}

impl SyncOutcome {
    /// Check if anything was pushed.
    pub fn any(&self) -> bool {
        self.page_pushed || self.page_size_pushed
    }
}

/// Mirror host values into the engine, equality-gated.
///
/// Page size is applied before the page index so the index is clamped
/// against the new page count. `refresh_page_count` is called between the
/// two when the size changes.
pub fn sync_controlled_props(
    props: ControlledProps,
    engine: &mut TableEngine,
    refresh_page_count: impl FnOnce(&mut TableEngine),
) -> SyncOutcome {
    let mut outcome = SyncOutcome::default();

    if engine.page_size() != props.page_size {
        debug!(
            "[sync] page size {} -> {} (host)",
            engine.page_size(),
            props.page_size
        );
        engine.set_page_size(props.page_size);
        refresh_page_count(engine);
        outcome.page_size_pushed = true;
    }

    if engine.page_index() != props.page {
        debug!("[sync] page {} -> {} (host)", engine.page_index(), props.page);
        engine.goto_page(props.page);
        outcome.page_pushed = true;
    }

    outcome
}
