//! Column resize engine.
//!
//! A drag on a column edge moves that column's width with the pointer. The
//! width is clamped into `[min_width, max_width]` on every update, not only
//! on release. Releasing commits the last width; there is no rollback path,
//! so an abandoned drag keeps whatever width it reached.

use log::{debug, trace};
use serde::Deserialize;

use crate::column::ColumnDescriptor;
use crate::events::EventResult;
use crate::state::TableEngine;

/// How drag updates reach the table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Every pointer move writes the clamped width into the engine.
    #[default]
    Live,
    /// Pointer moves update a pending width; release writes it once.
    Deferred,
}

/// An in-progress drag.
#[derive(Debug, Clone, PartialEq)]
struct ResizeDrag {
    column_id: String,
    start_width: f32,
    start_pointer_x: f32,
    /// Latest clamped width.
    pending_width: f32,
    min_width: f32,
    max_width: Option<f32>,
}

impl ResizeDrag {
    fn clamp(&self, width: f32) -> f32 {
        let width = width.max(self.min_width);
        match self.max_width {
            Some(max) => width.min(max),
            None => width,
        }
    }
}

/// Tracks the active drag and enforces width bounds.
#[derive(Debug, Clone, Default)]
pub struct ResizeEngine {
    mode: ResizeMode,
    drag: Option<ResizeDrag>,
}

impl ResizeEngine {
    /// Create a resize engine.
    pub fn new(mode: ResizeMode) -> Self {
        Self { mode, drag: None }
    }

    /// Check if a column is being dragged.
    pub fn is_resizing(&self, column_id: &str) -> bool {
        self.drag.as_ref().is_some_and(|d| d.column_id == column_id)
    }

    /// Current width of a column: the pending drag width, else the committed
    /// width, else the declared width. Always inside the column's bounds.
    pub fn width(&self, column: &ColumnDescriptor, engine: &TableEngine) -> f32 {
        if let Some(drag) = &self.drag
            && drag.column_id == column.id
        {
            return drag.pending_width;
        }
        let width = engine.column_width(&column.id).unwrap_or(column.width);
        column.clamp_width(width)
    }

    /// Set a width directly, clamped into bounds.
    pub fn set_column_width(
        &self,
        column: &ColumnDescriptor,
        width: f32,
        engine: &mut TableEngine,
    ) -> f32 {
        let clamped = column.clamp_width(width);
        if clamped != width {
            debug!(
                "[resize] '{}' width {} clamped to {}",
                column.id, width, clamped
            );
        }
        engine.set_column_width(&column.id, clamped);
        clamped
    }

    /// Start dragging a column edge.
    ///
    /// Ignored for non-resizable columns. Starting a new drag while one is
    /// active commits the old one first.
    pub fn begin(
        &mut self,
        column: &ColumnDescriptor,
        pointer_x: f32,
        engine: &mut TableEngine,
    ) -> EventResult {
        if !column.resizable {
            return EventResult::Ignored;
        }
        if self.drag.is_some() {
            self.release(engine);
        }
        let start_width = self.width(column, engine);
        debug!(
            "[resize] begin '{}' at width {} (pointer {})",
            column.id, start_width, pointer_x
        );
        self.drag = Some(ResizeDrag {
            column_id: column.id.clone(),
            start_width,
            start_pointer_x: pointer_x,
            pending_width: start_width,
            min_width: column.min_width,
            max_width: column.max_width,
        });
        EventResult::Consumed
    }

    /// Move the pointer. Returns the clamped width, or `None` without a drag.
    pub fn drag_to(&mut self, pointer_x: f32, engine: &mut TableEngine) -> Option<f32> {
        let requested = {
            let drag = self.drag.as_ref()?;
            drag.start_width + (pointer_x - drag.start_pointer_x)
        };
        self.drag_to_width(requested, engine)
    }

    /// Request an absolute width for the dragged column.
    pub fn drag_to_width(&mut self, requested: f32, engine: &mut TableEngine) -> Option<f32> {
        let mode = self.mode;
        let drag = self.drag.as_mut()?;
        let width = drag.clamp(requested);
        trace!(
            "[resize] '{}' requested {} -> {}",
            drag.column_id, requested, width
        );
        drag.pending_width = width;
        if mode == ResizeMode::Live {
            engine.set_column_width(&drag.column_id, width);
        }
        Some(width)
    }

    /// Release the pointer and commit the last width.
    pub fn release(&mut self, engine: &mut TableEngine) -> Option<(String, f32)> {
        let drag = self.drag.take()?;
        engine.set_column_width(&drag.column_id, drag.pending_width);
        debug!(
            "[resize] commit '{}' width {}",
            drag.column_id, drag.pending_width
        );
        Some((drag.column_id, drag.pending_width))
    }
}
