//! Error types for grid construction and data binding.
//!
//! Runtime requests that fall outside their valid range (page index, column
//! width, page size) are clamped rather than rejected, so the only errors
//! surfaced here are configuration bugs the host has to fix.

/// Errors raised while normalizing column declarations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColumnConfigError {
    /// Two columns resolve to the same id.
    #[error("Duplicate column id '{id}'")]
    DuplicateId {
        /// The colliding id.
        id: String,
    },

    /// A column with a function accessor was declared without an explicit id.
    #[error("Column {index} uses a function accessor and needs an explicit id")]
    MissingId {
        /// Position of the column in the declaration list.
        index: usize,
    },

    /// The declared minimum width exceeds the declared maximum width.
    #[error("Column '{id}' has min width {min} greater than max width {max}")]
    InvalidWidthRange {
        /// The column id.
        id: String,
        /// Declared minimum width.
        min: f32,
        /// Declared maximum width.
        max: f32,
    },
}

/// Errors raised while deriving row ids for the current page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowIdentityError {
    /// The id strategy produced nothing usable for a row.
    #[error("Row {index} has no usable id")]
    Missing {
        /// Position of the row in the current page.
        index: usize,
    },

    /// Two rows on the current page share an id.
    #[error("Duplicate row id '{id}' on the current page")]
    Duplicate {
        /// The colliding id.
        id: String,
    },
}

/// Errors raised while loading or validating a [`GridConfig`](crate::config::GridConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration could not be parsed.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Page size must be positive.
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    /// Every rows-per-page option must be positive.
    #[error("Rows-per-page options must all be greater than zero")]
    EmptyPageSizeOption,
}

/// Umbrella error for [`TableController`](crate::controller::TableController) operations.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Column declarations are invalid.
    #[error(transparent)]
    Column(#[from] ColumnConfigError),

    /// Row ids could not be derived for the supplied data.
    #[error(transparent)]
    RowIdentity(#[from] RowIdentityError),

    /// Grid configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
