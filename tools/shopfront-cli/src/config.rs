//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopfront_commerce::config::SearchBarConfig;

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shopfront.toml", ".shopfront.toml", "shopfront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopfrontConfig {
    /// Where the product catalog lives.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Search bar tunables.
    #[serde(default)]
    pub search: SearchBarConfig,
}

impl ShopfrontConfig {
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

/// Catalog source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the product JSON, relative to the working directory.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "products.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Generate a default shopfront.toml config file.
pub fn generate_default_config(catalog_path: &str) -> String {
    let catalog_path = toml::Value::String(catalog_path.to_string());
    format!(
        r#"# Shopfront configuration

[catalog]
path = {catalog_path}

[search]
# Suggestions shown in the dropdown
suggestion_limit = 8
# Delay before the dropdown hides after the input loses focus
hide_delay_ms = 200
"#,
        catalog_path = catalog_path
    )
}
