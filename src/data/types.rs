//! Data types for the host's category registry.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Post counts per category.
///
/// Keys iterate in ascending byte-wise name order, which is the order
/// category listings render in.
pub type CategoryCounts = BTreeMap<String, usize>;

/// One post reference inside a category's post list.
///
/// Every field is optional on ingest; only the number of entries in the
/// list is ever consumed.
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(dead_code)]
pub struct PostRef {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    /// Publication date as ISO 8601 string (e.g., "2024-01-15")
    #[serde(default)]
    pub date: Option<String>,
}
