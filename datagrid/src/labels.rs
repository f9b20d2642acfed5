//! Label lookup for localized header and footer text.

use std::collections::HashMap;

/// Message id for the sort tooltip prefix.
pub const SORT_BY: &str = "sort.by";
/// Message id for the resize-handle tooltip prefix.
pub const RESIZE: &str = "resize";
/// Message id for the footer page selector label.
pub const PAGE: &str = "page";

/// Resolves message ids into display labels.
///
/// The grid never formats localized text itself; every id it needs goes
/// through this trait.
pub trait LabelLookup {
    /// Resolve a message id. Unknown ids should resolve to something
    /// displayable rather than fail.
    fn label(&self, id: &str) -> String;
}

/// Returns every id unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLabels;

impl LabelLookup for IdentityLabels {
    fn label(&self, id: &str) -> String {
        id.to_string()
    }
}

/// Map-backed lookup that falls back to the id itself.
impl LabelLookup for HashMap<String, String> {
    fn label(&self, id: &str) -> String {
        self.get(id).cloned().unwrap_or_else(|| id.to_string())
    }
}
