//! `[base]` section configuration.
//!
//! Host site settings the fragments depend on.

use serde::{Deserialize, Serialize};

/// `[base]` section in catlist.toml - host site metadata.
///
/// # Example
/// ```toml
/// [base]
/// category_dir = "categories"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// URL path segment category pages live under
    /// (e.g. "categories" → `/categories/<slug>/`).
    /// Required; there is no fallback value.
    #[serde(default)]
    pub category_dir: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_category_dir() {
        let config = r#"
            [base]
            category_dir = "categories"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.category_dir, "categories");
    }

    #[test]
    fn test_base_config_missing_category_dir_stays_empty() {
        let config: SiteConfig = toml::from_str("[base]").unwrap();
        assert_eq!(config.base.category_dir, "");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            category_dir = "categories"
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_base_config_unicode_dir() {
        let config = r#"
            [base]
            category_dir = "分类"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.category_dir, "分类");
    }
}
