//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopfilter_core::config::FilterConfig;
use shopfilter_observability::{LogFormat, LogLevel};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Filter widget settings.
    #[serde(default)]
    pub filters: FilterConfig,

    /// Store settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Request logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Shop page URL, used when a command is given a bare query string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Default catalog snapshot file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level written to stderr.
    #[serde(default = "default_level")]
    pub level: LogLevel,

    /// Line format.
    #[serde(default = "default_format")]
    pub format: LogFormat,
}

fn default_level() -> LogLevel {
    LogLevel::Warn
}

fn default_format() -> LogFormat {
    LogFormat::Human
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Generate a default shopfilter.toml.
pub fn generate_default_config(base_url: &str) -> String {
    format!(
        r#"# Shop filter configuration

[site]
base_url = "{base_url}"
# catalog = "catalog.json"

[logging]
level = "warn"
format = "human"

[filters]
currency = "USD"

[filters.categories]
# title = "Product Categories"
orderby = "name"
count = true
show_children_only = false
hide_empty = false
# only = ["shoes", "bags"]

[filters.tags]
# title = "Product Tags"
orderby = "name"
count = true
hide_empty = true

[filters.price]
title = "Filter by price"

[filters.submit]
title = ""
"#,
        base_url = base_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfilter_core::config::TermOrder;

    #[test]
    fn test_generated_config_parses() {
        let config: CliConfig =
            toml::from_str(&generate_default_config("https://shop.test/shop/")).unwrap();
        assert_eq!(config.site.base_url.as_deref(), Some("https://shop.test/shop/"));
        assert_eq!(config.filters.categories.orderby, TermOrder::Name);
        assert!(config.filters.tags.hide_empty);
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert!(config.filters.categories.enabled);
        assert_eq!(config.logging.format, LogFormat::Human);
        assert!(config.site.base_url.is_none());
    }
}
