//! Host-exported site data.
//!
//! Categories are supplied by the host site generator; this tool never
//! creates or mutates them. The host writes its category registry to a
//! JSON file (`[build] data` in `catlist.toml`), and everything here is
//! read-only ingestion of that file.
//!
//! # Accepted shapes
//!
//! | Value shape           | Example                          |
//! |-----------------------|----------------------------------|
//! | bare post count       | `{"Rust": 12}`                   |
//! | post list             | `{"Rust": [{"title": "Hello"}]}` |

pub mod store;
pub mod types;

pub use store::SiteData;
pub use types::CategoryCounts;
