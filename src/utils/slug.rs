//! Category name slugification.
//!
//! Converts category names to the URL-safe form category pages live under.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of characters that never appear in a slug.
///
/// `_` counts as a word character to the regex engine but is replaced
/// like any other separator.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\W_]+").unwrap());

// ============================================================================
// Slugification
// ============================================================================

/// Derive the URL slug for a category name.
///
/// Every maximal run of non-word characters collapses to a single hyphen,
/// leading and trailing hyphens are stripped, and the result is lowercased.
/// Word characters follow Unicode semantics, so accented letters and CJK
/// text survive unchanged while symbols and emoji collapse away.
///
/// # Examples
///
/// | Input              | Slug              |
/// |--------------------|-------------------|
/// | `Sci-Fi & Fantasy` | `sci-fi-fantasy`  |
/// | `C++`              | `c`               |
/// | `Web 2.0`          | `web-2-0`         |
/// | `Café`             | `café`            |
pub fn slugify(name: &str) -> String {
    NON_WORD
        .replace_all(name, "-")
        .trim_matches('-')
        .to_lowercase()
}
