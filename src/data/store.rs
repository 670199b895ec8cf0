//! Category registry ingestion.
//!
//! The host site generator owns the categories; it hands them over as a
//! JSON object keyed by category name. Values come in two shapes:
//!
//! ```json
//! { "Rust": 12, "Go": 3 }
//! ```
//!
//! or the full post listing many generators export alongside their tag
//! index:
//!
//! ```json
//! { "Rust": [{ "url": "/posts/hello/", "title": "Hello", "date": "2024-01-15" }] }
//! ```
//!
//! Either way, only the per-category size reaches the renderer.

use super::types::{CategoryCounts, PostRef};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::Path};

/// One category's value in the registry file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryEntry {
    /// Bare post count. Negative numbers fail deserialization.
    Count(usize),
    /// Full post list; only its length is consumed.
    Posts(Vec<PostRef>),
}

impl CategoryEntry {
    /// Number of posts in this category.
    pub fn post_count(&self) -> usize {
        match self {
            CategoryEntry::Count(count) => *count,
            CategoryEntry::Posts(posts) => posts.len(),
        }
    }
}

/// Deserialized category registry, read-only once loaded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SiteData {
    categories: BTreeMap<String, CategoryEntry>,
}

impl SiteData {
    /// Parse a registry from a JSON string.
    pub fn from_str(content: &str) -> Result<Self> {
        let data = serde_json::from_str(content)?;
        Ok(data)
    }

    /// Load a registry from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read category data from {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid category data in {}", path.display()))
    }

    /// Post counts per category, keyed in ascending name order.
    ///
    /// Derived fresh on every call; nothing is cached across renders.
    pub fn post_counts(&self) -> CategoryCounts {
        self.categories
            .iter()
            .map(|(name, entry)| (name.clone(), entry.post_count()))
            .collect()
    }

    /// Number of categories in the registry.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
