//! Table controller.
//!
//! [`TableController`] is constructed once per grid and owns every piece of
//! interaction state. Consumers receive it by reference; there is no ambient
//! lookup. User interactions go through its methods, which route to the
//! sort, selection, resize and pagination protocols and fire host callbacks.
//!
//! # Example
//!
//! ```
//! use datagrid::prelude::*;
//! use serde_json::json;
//!
//! let mut grid = TableController::builder(vec![
//!     Column::new("name").header("Name"),
//!     Column::new("amount").header("Amount"),
//! ])
//! .config(GridConfig::new().sortable(true))
//! .build()
//! .unwrap();
//!
//! grid.set_data(vec![json!({ "id": 1, "name": "a", "amount": 3 })]).unwrap();
//! grid.set_record_count(1);
//! assert_eq!(grid.page_count(), 1);
//! assert!(grid.toggle_sort("amount").is_handled());
//! ```

use std::fmt;

use log::{debug, warn};
use serde_json::Value;

use crate::column::{Alignment, Column, ColumnDescriptor, ColumnModel, SELECTION_COLUMN_ID};
use crate::config::GridConfig;
use crate::error::{GridError, RowIdentityError};
use crate::events::{EventResult, GridHandlers};
use crate::labels::{self, IdentityLabels, LabelLookup};
use crate::pagination::{PageAction, PaginationFooter};
use crate::resize::ResizeEngine;
use crate::row::{Row, RowIdStrategy, build_rows, value_text};
use crate::selection::{CheckState, SelectionCoordinator, SelectionMode, check_state};
use crate::sort::{self, SortState};
use crate::state::{TableEngine, TableState};
use crate::sync::{ControlledProps, SyncOutcome, sync_controlled_props};
use crate::view::{
    BodyCell, BodyRow, GridView, HeaderCell, HeaderContent, SELECTION_COLUMN_WIDTH,
};

/// Everything the host supplies on a render.
#[derive(Debug, Clone, PartialEq)]
pub struct GridProps {
    /// Rows of the current page only.
    pub data: Vec<Value>,
    /// Total rows across all pages.
    pub record_count: usize,
    /// Controlled page index.
    pub page: usize,
    /// Controlled page size.
    pub page_size: usize,
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`TableController`].
pub struct TableControllerBuilder {
    columns: Vec<Column>,
    config: GridConfig,
    row_id: RowIdStrategy,
    labels: Box<dyn LabelLookup>,
    handlers: GridHandlers,
}

impl TableControllerBuilder {
    /// Set the grid configuration.
    pub fn config(mut self, config: GridConfig) -> Self {
        self.config = config;
        self
    }

    /// Set how rows derive their ids. Defaults to the `id` key.
    pub fn row_id(mut self, strategy: RowIdStrategy) -> Self {
        self.row_id = strategy;
        self
    }

    /// Set the label lookup. Defaults to returning ids unchanged.
    pub fn labels(mut self, labels: impl LabelLookup + 'static) -> Self {
        self.labels = Box::new(labels);
        self
    }

    /// Set the host callbacks.
    pub fn handlers(mut self, handlers: GridHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Validate the configuration, normalize columns and seed the state.
    pub fn build(self) -> Result<TableController, GridError> {
        self.config.validate()?;
        let columns = ColumnModel::build(self.columns, self.config.sortable, self.labels.as_ref())?;

        let state = TableState::new(
            self.config.page,
            self.config.page_size,
            &self.config.selected,
        );
        let mode = if self.config.single_select {
            SelectionMode::Single
        } else {
            SelectionMode::Multi
        };
        debug!(
            "[controller] mounted: page {}, page size {}, {:?} selection, {} preselected",
            state.page_index,
            state.page_size,
            mode,
            state.selected_row_ids.len()
        );

        Ok(TableController {
            engine: TableEngine::new(state),
            selection: SelectionCoordinator::new(mode),
            resize: ResizeEngine::new(self.config.resize_mode),
            footer: PaginationFooter::new(
                self.config.rows_per_page_options.clone(),
                self.config.disable_pagination_input,
            ),
            columns,
            rows: Vec::new(),
            row_id: self.row_id,
            labels: self.labels,
            handlers: self.handlers,
            config: self.config,
        })
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Headless controller for one grid instance.
pub struct TableController {
    config: GridConfig,
    columns: ColumnModel,
    row_id: RowIdStrategy,
    labels: Box<dyn LabelLookup>,
    rows: Vec<Row>,
    engine: TableEngine,
    selection: SelectionCoordinator,
    resize: ResizeEngine,
    footer: PaginationFooter,
    handlers: GridHandlers,
}

impl TableController {
    /// Start building a controller for the given columns.
    pub fn builder(columns: Vec<Column>) -> TableControllerBuilder {
        TableControllerBuilder {
            columns,
            config: GridConfig::default(),
            row_id: RowIdStrategy::default(),
            labels: Box::new(IdentityLabels),
            handlers: GridHandlers::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Host inputs
    // -------------------------------------------------------------------------

    /// Apply a full render's props: data, record count, then the controlled
    /// page and page size.
    pub fn update(&mut self, props: GridProps) -> Result<SyncOutcome, GridError> {
        self.set_data(props.data)?;
        self.set_record_count(props.record_count);
        Ok(self.sync_props(props.page, props.page_size))
    }

    /// Replace the current page's rows.
    ///
    /// On failure the previous rows are kept.
    pub fn set_data(&mut self, data: Vec<Value>) -> Result<(), RowIdentityError> {
        let rows = build_rows(data, self.columns.columns(), &self.row_id)?;
        debug!("[controller] received {} rows", rows.len());
        self.rows = rows;
        Ok(())
    }

    /// Replace the total record count. The page index is clamped if it falls
    /// out of range.
    pub fn set_record_count(&mut self, record_count: usize) {
        self.footer.set_record_count(record_count, &mut self.engine);
    }

    /// Mirror the host's controlled page and page size. Never fires callbacks.
    pub fn sync_props(&mut self, page: usize, page_size: usize) -> SyncOutcome {
        let footer = &self.footer;
        sync_controlled_props(
            ControlledProps { page, page_size },
            &mut self.engine,
            |engine| {
                footer.refresh_page_count(engine);
            },
        )
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Header click on a column.
    pub fn toggle_sort(&mut self, column_id: &str) -> EventResult {
        sort::toggle_sort(column_id, &self.columns, &mut self.engine, &mut self.handlers)
    }

    /// Sort state of a column.
    pub fn sort_state(&self, column_id: &str) -> SortState {
        SortState::of(column_id, self.engine.state().sort_by.as_ref())
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Click on a row's selection control. Only rows on the current page
    /// have a control; other ids are ignored.
    pub fn toggle_row_selected(&mut self, id: &str) -> EventResult {
        if self.row(id).is_none() {
            warn!("[controller] row '{}' is not on the current page", id);
            return EventResult::Ignored;
        }
        self.selection
            .toggle_row_selected(id, &mut self.engine, &mut self.handlers)
    }

    /// Add or remove every visible row.
    pub fn toggle_all_rows_selected(&mut self, selected: bool) -> EventResult {
        let visible = self.rows.iter().map(|r| r.id.as_str());
        self.selection
            .toggle_all_rows_selected(selected, visible, &mut self.engine, &mut self.handlers)
    }

    /// Click on the select-all control.
    pub fn toggle_select_all(&mut self) -> EventResult {
        if self.selection.mode() == SelectionMode::Single {
            return EventResult::Ignored;
        }
        let visible = self.rows.iter().map(|r| r.id.as_str());
        self.selection
            .toggle_all(visible, &mut self.engine, &mut self.handlers)
    }

    /// Select-all state over the visible rows.
    pub fn header_check_state(&self) -> CheckState {
        check_state(self.rows.iter().map(|r| r.id.as_str()), self.engine.state())
    }

    /// Selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// Selected ids in key order, including ids not on this page.
    pub fn selected_ids(&self) -> Vec<String> {
        self.engine.state().selected_ids()
    }

    /// Selected rows that are on the current page.
    pub fn selected_rows(&self) -> Vec<&Row> {
        let state = self.engine.state();
        self.rows.iter().filter(|r| state.is_selected(&r.id)).collect()
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Run a footer navigation action.
    pub fn navigate(&mut self, action: PageAction) -> EventResult {
        self.footer
            .navigate(action, &mut self.engine, &mut self.handlers)
    }

    /// Go to the first page.
    pub fn first_page(&mut self) -> EventResult {
        self.navigate(PageAction::First)
    }

    /// Go to the previous page.
    pub fn previous_page(&mut self) -> EventResult {
        self.navigate(PageAction::Previous)
    }

    /// Go to the next page.
    pub fn next_page(&mut self) -> EventResult {
        self.navigate(PageAction::Next)
    }

    /// Go to the last page.
    pub fn last_page(&mut self) -> EventResult {
        self.navigate(PageAction::Last)
    }

    /// Pick a page from the page selector.
    pub fn select_page(&mut self, page: usize) -> EventResult {
        self.footer
            .select_page(page, &mut self.engine, &mut self.handlers)
    }

    /// Pick a page size from the rows-per-page selector.
    pub fn change_page_size(&mut self, page_size: usize) -> EventResult {
        if !self.footer.rows_per_page_options().is_empty()
            && !self.footer.rows_per_page_options().contains(&page_size)
        {
            debug!(
                "[controller] page size {} is not one of {:?}",
                page_size,
                self.footer.rows_per_page_options()
            );
        }
        self.footer
            .change_page_size(page_size, &mut self.engine, &mut self.handlers)
    }

    /// Total number of pages.
    pub fn page_count(&self) -> usize {
        self.footer.page_count(&self.engine)
    }

    /// Total record count, if supplied.
    pub fn record_count(&self) -> Option<usize> {
        self.footer.record_count()
    }

    /// Previous/first are available.
    pub fn can_previous_page(&self) -> bool {
        self.footer.can_previous(&self.engine)
    }

    /// Next/last are available.
    pub fn can_next_page(&self) -> bool {
        self.footer.can_next(&self.engine)
    }

    // -------------------------------------------------------------------------
    // Resizing
    // -------------------------------------------------------------------------

    /// Start dragging a column edge.
    pub fn begin_resize(&mut self, column_id: &str, pointer_x: f32) -> EventResult {
        let Some(column) = self.columns.get(column_id) else {
            warn!("[controller] resize on unknown column '{}'", column_id);
            return EventResult::Ignored;
        };
        self.resize.begin(column, pointer_x, &mut self.engine)
    }

    /// Pointer moved during a drag.
    pub fn drag_resize(&mut self, pointer_x: f32) -> Option<f32> {
        self.resize.drag_to(pointer_x, &mut self.engine)
    }

    /// Request an absolute width for the dragged column.
    pub fn drag_resize_to_width(&mut self, width: f32) -> Option<f32> {
        self.resize.drag_to_width(width, &mut self.engine)
    }

    /// Pointer released; commit the dragged width.
    pub fn end_resize(&mut self) -> Option<(String, f32)> {
        self.resize.release(&mut self.engine)
    }

    /// Set a column width directly, clamped into its bounds.
    pub fn set_column_width(&mut self, column_id: &str, width: f32) -> Option<f32> {
        let column = self.columns.get(column_id)?;
        Some(self.resize.set_column_width(column, width, &mut self.engine))
    }

    /// Current width of a column.
    pub fn column_width(&self, column_id: &str) -> Option<f32> {
        if column_id == SELECTION_COLUMN_ID {
            return Some(SELECTION_COLUMN_WIDTH);
        }
        self.columns
            .get(column_id)
            .map(|c| self.resize.width(c, &self.engine))
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Current state snapshot.
    pub fn state(&self) -> &TableState {
        self.engine.state()
    }

    /// Grid configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Column descriptors.
    pub fn columns(&self) -> &ColumnModel {
        &self.columns
    }

    /// Rows of the current page.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Find a visible row by id.
    pub fn row(&self, id: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Ids of the visible rows, in display order.
    pub fn visible_ids(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.id.clone()).collect()
    }

    /// Check if the state changed since the last clear.
    pub fn is_dirty(&self) -> bool {
        self.engine.is_dirty()
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&mut self) {
        self.engine.clear_dirty();
    }

    // -------------------------------------------------------------------------
    // Render model
    // -------------------------------------------------------------------------

    /// Build the render snapshot for the current state.
    pub fn view(&self) -> GridView {
        let state = self.engine.state();

        let mut header = Vec::with_capacity(self.columns.len() + 1);
        header.push(self.selection_header());
        header.extend(self.columns.iter().map(|c| self.header_cell(c, state)));

        let rows = self
            .rows
            .iter()
            .map(|row| BodyRow {
                id: row.id.clone(),
                index: row.index,
                control: self.selection.row_control(&row.id, state),
                cells: self
                    .columns
                    .iter()
                    .zip(&row.cells)
                    .map(|(column, cell)| BodyCell {
                        column_id: column.id.clone(),
                        text: column.render(&cell.value, &row.original),
                        title: value_text(&cell.value),
                        align: column.align,
                        width: self.resize.width(column, &self.engine),
                    })
                    .collect(),
            })
            .collect();

        GridView {
            dense: self.config.dense,
            header,
            rows,
            footer: self.footer.view(&self.engine, self.labels.as_ref()),
        }
    }

    fn selection_header(&self) -> HeaderCell {
        let content = match self.selection.mode() {
            SelectionMode::Single => HeaderContent::Label(self.config.select_column_label.clone()),
            SelectionMode::Multi => HeaderContent::SelectAll(self.header_check_state()),
        };
        let align = Alignment::Center;
        HeaderCell {
            column_id: SELECTION_COLUMN_ID.to_string(),
            content,
            title: None,
            resize_title: None,
            align,
            justify: align.justify(),
            width: SELECTION_COLUMN_WIDTH,
            sortable: false,
            resizable: false,
            sort: SortState::Unsorted,
            resizing: false,
        }
    }

    fn header_cell(&self, column: &ColumnDescriptor, state: &TableState) -> HeaderCell {
        let title = column.title.clone().or_else(|| {
            column.sortable.then(|| {
                format!("{} {}", self.labels.label(labels::SORT_BY), column.header)
            })
        });
        let resize_title = column
            .resizable
            .then(|| format!("{} {}", self.labels.label(labels::RESIZE), column.header));
        HeaderCell {
            column_id: column.id.clone(),
            content: HeaderContent::Label(column.header.clone()),
            title,
            resize_title,
            align: column.align,
            justify: column.align.justify(),
            width: self.resize.width(column, &self.engine),
            sortable: column.sortable,
            resizable: column.resizable,
            sort: SortState::of(&column.id, state.sort_by.as_ref()),
            resizing: self.resize.is_resizing(&column.id),
        }
    }
}

impl fmt::Debug for TableController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableController")
            .field("config", &self.config)
            .field("columns", &self.columns)
            .field("row_id", &self.row_id)
            .field("rows", &self.rows.len())
            .field("engine", &self.engine)
            .field("selection", &self.selection)
            .field("resize", &self.resize)
            .field("footer", &self.footer)
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}
