//! Template tag registrations.
//!
//! Two tag names share one renderer; the output format is fixed by the
//! mode each name is registered with, never inferred at render time.
//!
//! | Tag name             | Mode  |
//! |----------------------|-------|
//! | `category_list`      | List  |
//! | `category_tag_cloud` | Cloud |

use crate::render::{CategoryRenderer, RenderMode};
use std::collections::BTreeMap;

/// Tag name for the alphabetical category list.
pub const CATEGORY_LIST: &str = "category_list";

/// Tag name for the font-scaled tag cloud.
pub const CATEGORY_TAG_CLOUD: &str = "category_tag_cloud";

/// Fixed-name map from tag name to its renderer.
pub struct TagRegistry {
    tags: BTreeMap<&'static str, CategoryRenderer>,
}

impl TagRegistry {
    /// Registry with both builtin tags installed.
    pub fn builtin() -> Self {
        let mut tags = BTreeMap::new();
        tags.insert(CATEGORY_LIST, CategoryRenderer::new(RenderMode::List));
        tags.insert(CATEGORY_TAG_CLOUD, CategoryRenderer::new(RenderMode::Cloud));
        Self { tags }
    }

    /// Look up the renderer registered under `name`.
    pub fn get(&self, name: &str) -> Option<&CategoryRenderer> {
        self.tags.get(name)
    }

    /// Registered (name, renderer) pairs in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CategoryRenderer)> {
        self.tags.iter().map(|(name, renderer)| (*name, renderer))
    }

    /// Registered tag names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.tags.keys().copied()
    }
}
