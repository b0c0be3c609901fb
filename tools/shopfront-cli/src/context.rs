//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shopfront_commerce::catalog::Catalog;

use crate::config::{ShopfrontConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopfrontConfig,
    /// File the config came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (ShopfrontConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match find_config_file(&cwd) {
                Some(path) => {
                    let config = ShopfrontConfig::load(&path.to_string_lossy())?;
                    (config, Some(path))
                }
                None => (ShopfrontConfig::default(), None),
            }
        };

        tracing::debug!(config = ?config_path, "loaded configuration");

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Context with default config, for commands that must work even when
    /// the config on disk is broken.
    pub fn without_config(output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self {
            config: ShopfrontConfig::default(),
            config_path: None,
            output,
            cwd,
        })
    }

    /// Read and parse the configured product catalog.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let path = self.catalog_path();
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let catalog = Catalog::from_json(&json)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;

        self.output
            .debug(&format!("Loaded {} products from {}", catalog.len(), path.display()));
        Ok(catalog)
    }

    /// The catalog file, resolved against the config file's directory when
    /// one was found, else the working directory.
    pub fn catalog_path(&self) -> PathBuf {
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(self.cwd.as_path());
        resolve_path(base, &self.config.catalog.path)
    }
}

/// Find a config file in `start` or its ancestors.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Resolve a path relative to `base`.
pub fn resolve_path(base: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        base.join(path)
    }
}
