//! Category fragment rendering.
//!
//! Turns a category → post-count mapping into one of two HTML fragments:
//!
//! # List format (`category_list`)
//!
//! ```html
//! <article><h1><a href="/categories/rust/">Rust</a></h1><span class="post-count" data-count="3">three posts</span></article>
//! ```
//!
//! # Cloud format (`category_tag_cloud`)
//!
//! ```html
//! <li style="list-style-type:none;display:inline;" class="category"><a style="font-size:0.9em" href="/categories/rust/">Rust</a></li>
//! ```
//!
//! Cloud items carry a trailing space separator and sit on a single line.
//! Categories render in ascending lexicographic name order in both formats,
//! and an empty mapping yields the empty string.

pub mod words;

use crate::data::types::CategoryCounts;
use crate::utils::slug::slugify;
use std::borrow::Cow;
use words::count_label;

// ============================================================================
// Render Mode
// ============================================================================

/// Output format, fixed per renderer at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// One `<article>` block per category with a spelled-out post count.
    List,
    /// Inline `<li>` items whose font size scales with the post count.
    Cloud,
}

impl RenderMode {
    /// Short name for logs and the `tags` listing.
    pub const fn name(self) -> &'static str {
        match self {
            RenderMode::List => "list",
            RenderMode::Cloud => "cloud",
        }
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Renders category fragments in one fixed mode.
///
/// Rendering is pure: no I/O, no mutation of inputs, byte-identical
/// output for identical inputs.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRenderer {
    mode: RenderMode,
}

impl CategoryRenderer {
    pub const fn new(mode: RenderMode) -> Self {
        Self { mode }
    }

    pub const fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Render every category against `category_dir`.
    ///
    /// `counts` iterates in ascending byte-wise name order, which is the
    /// order categories appear in the output. Counts are taken as given;
    /// nothing is cached between calls.
    pub fn render(&self, counts: &CategoryCounts, category_dir: &str) -> String {
        let mut html = String::with_capacity(counts.len() * 160);

        for (name, &count) in counts {
            let url = category_url(name, category_dir);
            match self.mode {
                RenderMode::Cloud => push_cloud_item(&mut html, name, &url, count),
                RenderMode::List => push_list_item(&mut html, name, &url, count),
            }
        }

        html
    }
}

// ============================================================================
// Fragment Building
// ============================================================================

/// Target URL for a category page: `/` + category_dir + `/` + slug + `/`.
fn category_url(name: &str, category_dir: &str) -> String {
    format!("/{category_dir}/{}/", slugify(name))
}

/// One tag-cloud entry, followed by its space separator.
fn push_cloud_item(html: &mut String, name: &str, url: &str, count: usize) {
    html.push_str(&format!(
        r#"<li style="list-style-type:none;display:inline;" class="category"><a style="font-size:{}em" href="{}">{}</a></li> "#,
        font_size_em(count),
        html_escape(url),
        html_escape(name),
    ));
}

/// One list entry.
fn push_list_item(html: &mut String, name: &str, url: &str, count: usize) {
    html.push_str(&format!(
        r#"<article><h1><a href="{}">{}</a></h1><span class="post-count" data-count="{}">{}</span></article>"#,
        html_escape(url),
        html_escape(name),
        count,
        count_label(count),
    ));
}

/// Font size in em for a cloud entry: 0.6 base plus 0.1 per post.
///
/// Computed in integer tenths so the output is exact decimal text for
/// every count (`0.6`, `1.6`, `10.6`), with no upper bound.
fn font_size_em(count: usize) -> String {
    let tenths = count + 6;
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Escape HTML special characters.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
fn html_escape(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['<', '>', '&', '"']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

// ============================================================================
// Tests
// ============================================================================
