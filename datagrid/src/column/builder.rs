//! Column model builder.

use std::collections::HashSet;

use log::debug;

use crate::error::ColumnConfigError;
use crate::labels::LabelLookup;

use super::{Column, ColumnDescriptor, HeaderSource};

/// Minimum width applied when a column does not declare one.
pub const DEFAULT_MIN_WIDTH: f32 = 100.0;

/// Width applied when a column does not declare one.
pub const DEFAULT_WIDTH: f32 = 150.0;

/// Id reserved for the synthetic selection column.
pub const SELECTION_COLUMN_ID: &str = "selection";

/// Ordered, immutable list of column descriptors.
#[derive(Debug, Clone, Default)]
pub struct ColumnModel {
    columns: Vec<ColumnDescriptor>,
}

impl ColumnModel {
    /// Normalize column declarations.
    ///
    /// `sortable` is the grid-wide sort switch; a column is sortable only if
    /// it is on and the column did not opt out.
    pub fn build(
        columns: Vec<Column>,
        sortable: bool,
        labels: &dyn LabelLookup,
    ) -> Result<Self, ColumnConfigError> {
        let mut seen: HashSet<String> = HashSet::with_capacity(columns.len() + 1);
        seen.insert(SELECTION_COLUMN_ID.to_string());

        let mut descriptors = Vec::with_capacity(columns.len());
        for (index, column) in columns.into_iter().enumerate() {
            let id = match (&column.id, column.accessor.path()) {
                (Some(id), _) => id.clone(),
                (None, Some(path)) => path.to_string(),
                (None, None) => return Err(ColumnConfigError::MissingId { index }),
            };
            if !seen.insert(id.clone()) {
                return Err(ColumnConfigError::DuplicateId { id });
            }

            let min_width = column.min_width.unwrap_or(DEFAULT_MIN_WIDTH);
            if let Some(max) = column.max_width
                && min_width > max
            {
                return Err(ColumnConfigError::InvalidWidthRange {
                    id,
                    min: min_width,
                    max,
                });
            }

            let header = match &column.header {
                Some(HeaderSource::Literal(text)) => text.clone(),
                Some(HeaderSource::LocalizedId(message_id)) => labels.label(message_id),
                Some(HeaderSource::Computed(f)) => f(),
                None => String::new(),
            };
            let title = column.title_id.as_deref().map(|id| labels.label(id));

            let mut descriptor = ColumnDescriptor {
                id,
                accessor: column.accessor,
                header,
                title,
                cell: column.cell,
                sortable: sortable && !column.disable_sort_by,
                resizable: !column.disable_resizing,
                width: 0.0,
                min_width,
                max_width: column.max_width,
                align: column.align,
            };
            descriptor.width = descriptor.clamp_width(column.width.unwrap_or(DEFAULT_WIDTH));
            descriptors.push(descriptor);
        }

        debug!(
            "[columns] built {} columns: {:?}",
            descriptors.len(),
            descriptors.iter().map(|c| c.id.as_str()).collect::<Vec<_>>()
        );

        Ok(Self {
            columns: descriptors,
        })
    }

    /// Get a column by id.
    pub fn get(&self, id: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Get the position of a column.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    /// Get all columns in order.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Iterate columns in order.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
