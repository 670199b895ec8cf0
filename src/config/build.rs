//! `[build]` section configuration.
//!
//! Fragment emission settings: registry input, output directory, minify.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in catlist.toml.
///
/// # Example
/// ```toml
/// [build]
/// data = "_data/categories.json"   # host-exported registry
/// output = "public"                # where `build` writes fragments
/// minify = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Category registry file exported by the host site (JSON).
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Fragment output directory for `build`.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Minify emitted fragments (write/print path only).
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,
}

// ============================================================================
// Tests
// ============================================================================
