//! Headless data grid controller.
//!
//! Tracks pagination, sorting, row selection and column widths for a grid
//! whose data is paged and ordered by the host. The controller never fetches,
//! slices or sorts rows; it records intent and tells the host what was
//! requested through callbacks.

pub mod column;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod labels;
pub mod pagination;
pub mod resize;
pub mod row;
pub mod selection;
pub mod sort;
pub mod state;
pub mod sync;
pub mod view;

pub use controller::{GridProps, TableController, TableControllerBuilder};
pub use error::GridError;

pub mod prelude {
    pub use crate::column::{
        Accessor, Alignment, Column, ColumnDescriptor, ColumnModel, HeaderSource,
    };
    pub use crate::config::GridConfig;
    pub use crate::controller::{GridProps, TableController};
    pub use crate::error::{ColumnConfigError, ConfigError, GridError, RowIdentityError};
    pub use crate::events::{EventResult, GridHandlers, PageChange, RowSelect, SortChange};
    pub use crate::labels::{IdentityLabels, LabelLookup};
    pub use crate::pagination::PageAction;
    pub use crate::resize::ResizeMode;
    pub use crate::row::{Row, RowIdStrategy};
    pub use crate::selection::{CheckState, SelectionControl, SelectionMode};
    pub use crate::sort::{SortDirection, SortState};
    pub use crate::state::{SortBy, TableState};
    pub use crate::view::{GridView, HeaderContent};
}
