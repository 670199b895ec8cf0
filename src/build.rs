//! Fragment building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_fragments()
//!     │
//!     ├── SiteData::from_path() ──► registry JSON → per-category post counts
//!     │
//!     └── for each registered tag:
//!             render ──► minify (optional) ──► <output>/<tag>.html
//! ```
//!
//! `render_fragment()` runs the same pipeline for one tag and prints the
//! result to stdout instead of writing a file.

use crate::{
    config::SiteConfig, data::SiteData, log, tags::TagRegistry, utils::minify::minify_fragment,
};
use anyhow::{Context, Result, bail};
use std::{fs, io::Write};

/// Render every registered tag and write one fragment per tag into the
/// output directory.
pub fn build_fragments(config: &SiteConfig) -> Result<()> {
    let registry = TagRegistry::builtin();
    let data = SiteData::from_path(&config.build.data)?;
    log!("data"; "found {} categories", data.len());
    let counts = data.post_counts();

    let output = &config.build.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    for (name, renderer) in registry.iter() {
        let html = renderer.render(&counts, &config.base.category_dir);
        let html = minify_fragment(html.as_bytes(), config);

        let path = output.join(format!("{name}.html"));
        fs::write(&path, &html)
            .with_context(|| format!("Failed to write fragment: {}", path.display()))?;
        log!("render"; "{}", path.display());
    }

    log!("build"; "done");
    Ok(())
}

/// Render a single registered tag and print the fragment to stdout.
///
/// Nothing else is written to stdout and no trailing newline is added,
/// so the output can be spliced into a template verbatim.
pub fn render_fragment(config: &SiteConfig, tag: &str) -> Result<()> {
    let registry = TagRegistry::builtin();
    let Some(renderer) = registry.get(tag) else {
        bail!(
            "Unknown tag `{tag}`, registered tags: {}",
            registry.names().collect::<Vec<_>>().join(", ")
        );
    };

    let counts = SiteData::from_path(&config.build.data)?.post_counts();
    let html = renderer.render(&counts, &config.base.category_dir);
    let html = minify_fragment(html.as_bytes(), config);

    std::io::stdout().lock().write_all(&html)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::tags::{CATEGORY_LIST, CATEGORY_TAG_CLOUD};
    use clap::Parser;
    use std::path::Path;

    fn make_config(args: &[&str]) -> SiteConfig {
        let mut config = SiteConfig::from_str(
            r#"
            [base]
            category_dir = "categories"
        "#,
        )
        .unwrap();
        let cli = Box::leak(Box::new(Cli::parse_from(args)));
        config.update_with_cli(cli);
        config
    }

    fn write_registry(root: &Path, json: &str) {
        fs::create_dir_all(root.join("_data")).unwrap();
        fs::write(root.join("_data/categories.json"), json).unwrap();
    }

    #[test]
    fn test_build_fragments_writes_one_file_per_tag() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_registry(root, r#"{"Rust": 3, "Writing": 1}"#);

        let config = make_config(&["catlist", "--root", root.to_str().unwrap(), "build"]);
        build_fragments(&config).unwrap();

        let list = fs::read_to_string(root.join(format!("public/{CATEGORY_LIST}.html"))).unwrap();
        assert!(list.contains("three posts"));
        assert!(list.contains("one post"));
        assert!(list.contains(r#"href="/categories/rust/""#));

        let cloud =
            fs::read_to_string(root.join(format!("public/{CATEGORY_TAG_CLOUD}.html"))).unwrap();
        assert!(cloud.contains("font-size:0.9em"));
        assert!(cloud.contains("font-size:0.7em"));
    }

    #[test]
    fn test_build_fragments_minified() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_registry(root, r#"{"Rust": 3}"#);

        let config = make_config(&[
            "catlist", "--root", root.to_str().unwrap(), "build", "--minify",
        ]);
        build_fragments(&config).unwrap();

        let list = fs::read(root.join(format!("public/{CATEGORY_LIST}.html"))).unwrap();
        assert!(!list.is_empty());
    }

    #[test]
    fn test_build_fragments_missing_registry() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        let config = make_config(&["catlist", "--root", root.to_str().unwrap(), "build"]);
        let err = build_fragments(&config).unwrap_err().to_string();

        assert!(err.contains("Failed to read category data"));
    }

    #[test]
    fn test_render_fragment_unknown_tag() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_registry(root, r#"{"Rust": 3}"#);

        let config = make_config(&[
            "catlist", "--root", root.to_str().unwrap(), "render", "nope",
        ]);
        let err = render_fragment(&config, "nope").unwrap_err().to_string();

        assert!(err.contains("Unknown tag `nope`"));
        assert!(err.contains(CATEGORY_LIST));
        assert!(err.contains(CATEGORY_TAG_CLOUD));
    }

    #[test]
    fn test_build_fragments_accepts_post_list_form() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_registry(
            root,
            r#"{"Rust": [{"url": "/posts/a/"}, {"url": "/posts/b/"}], "Go": 1}"#,
        );

        let config = make_config(&["catlist", "--root", root.to_str().unwrap(), "build"]);
        build_fragments(&config).unwrap();

        let list = fs::read_to_string(root.join(format!("public/{CATEGORY_LIST}.html"))).unwrap();
        assert!(list.contains(r#"data-count="2">two posts<"#));
        assert!(list.contains(r#"data-count="1">one post<"#));
    }
}
