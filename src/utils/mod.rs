//! Utility modules for the fragment generator.

pub mod minify;
pub mod slug;
