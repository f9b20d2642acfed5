//! Grid configuration.
//!
//! Holds every host-facing prop that is not page data. The host can build a
//! config in code or load the same surface from JSON.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::resize::ResizeMode;

/// Default page size when the host does not supply one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default rows-per-page choices offered by the footer.
pub const DEFAULT_ROWS_PER_PAGE_OPTIONS: [usize; 4] = [5, 10, 20, 25];

/// Per-grid configuration.
///
/// # Examples
///
/// ```
/// use datagrid::config::GridConfig;
///
/// let config = GridConfig::new().page_size(20).sortable(true);
/// assert_eq!(config.page_size, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Initial (and controlled) page index, 0-based.
    pub page: usize,

    /// Initial (and controlled) page size.
    pub page_size: usize,

    /// Global sort enable. Columns can still opt out individually.
    pub sortable: bool,

    /// Allow only one selected row at a time.
    pub single_select: bool,

    /// Row ids selected at mount.
    pub selected: Vec<String>,

    /// Header label for the selection column in single-select mode.
    pub select_column_label: String,

    /// Page sizes offered by the footer.
    pub rows_per_page_options: Vec<usize>,

    /// Disables every pagination control.
    pub disable_pagination_input: bool,

    /// Compact row density.
    pub dense: bool,

    /// How column drags reach the table state.
    pub resize_mode: ResizeMode,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sortable: false,
            single_select: false,
            selected: Vec::new(),
            select_column_label: String::new(),
            rows_per_page_options: DEFAULT_ROWS_PER_PAGE_OPTIONS.to_vec(),
            disable_pagination_input: false,
            dense: false,
            resize_mode: ResizeMode::default(),
        }
    }
}

impl GridConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the table state relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.rows_per_page_options.contains(&0) {
            return Err(ConfigError::EmptyPageSizeOption);
        }
        Ok(())
    }

    /// Set the initial page index.
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Set the initial page size.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Enable or disable sorting globally.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Restrict selection to a single row.
    pub fn single_select(mut self, single_select: bool) -> Self {
        self.single_select = single_select;
        self
    }

    /// Set the row ids selected at mount.
    pub fn selected<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Set the selection column header label (single-select mode).
    pub fn select_column_label(mut self, label: impl Into<String>) -> Self {
        self.select_column_label = label.into();
        self
    }

    /// Set the page sizes offered by the footer.
    pub fn rows_per_page_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.rows_per_page_options = options.into();
        self
    }

    /// Disable every pagination control.
    pub fn disable_pagination_input(mut self, disabled: bool) -> Self {
        self.disable_pagination_input = disabled;
        self
    }

    /// Use compact rows.
    pub fn dense(mut self, dense: bool) -> Self {
        self.dense = dense;
        self
    }

    /// Set the resize mode.
    pub fn resize_mode(mut self, mode: ResizeMode) -> Self {
        self.resize_mode = mode;
        self
    }
}
