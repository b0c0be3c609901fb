//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CatalogConfig, ShopfrontConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init {
            catalog,
            as_json,
            force,
        } => init_config(&catalog, as_json, force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config)?;
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv("path", &ctx.config.catalog.path);
    ctx.output.kv("resolved", &ctx.catalog_path().display().to_string());

    ctx.output.info("");
    ctx.output.info("[search]");
    ctx.output.kv(
        "suggestion_limit",
        &ctx.config.search.suggestion_limit.to_string(),
    );
    ctx.output.kv("hide_delay_ms", &ctx.config.search.hide_delay_ms.to_string());

    Ok(())
}

fn init_config(catalog: &str, as_json: bool, force: bool, ctx: &Context) -> Result<()> {
    let file_name = if as_json {
        "shopfront.json"
    } else {
        "shopfront.toml"
    };
    let config_path = ctx.cwd.join(file_name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if as_json {
        let config = ShopfrontConfig {
            catalog: CatalogConfig {
                path: catalog.to_string(),
            },
            ..Default::default()
        };
        config.save(&config_path.to_string_lossy())?;
    } else {
        std::fs::write(&config_path, generate_default_config(catalog))?;
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Output;

    fn ctx_in(dir: &std::path::Path) -> Context {
        Context {
            config: ShopfrontConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_init_force_replaces_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopfront.toml");
        std::fs::write(&path, "path = \"C:\\data\"\n[search\n").unwrap();
        assert!(ShopfrontConfig::load(path.to_str().unwrap()).is_err());

        let ctx = ctx_in(dir.path());
        assert!(init_config(r"C:\data\products.json", false, false, &ctx).is_err());
        init_config(r"C:\data\products.json", false, true, &ctx).unwrap();

        let config = ShopfrontConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.catalog.path, r"C:\data\products.json");
    }

    #[test]
    fn test_init_as_json() {
        let dir = tempfile::tempdir().unwrap();
        init_config("catalog.json", true, false, &ctx_in(dir.path())).unwrap();

        let config = ShopfrontConfig::load(dir.path().join("shopfront.json").to_str().unwrap())
            .unwrap();
        assert_eq!(config.catalog.path, "catalog.json");
        assert_eq!(config.search.suggestion_limit, 8);
    }

    #[test]
    fn test_only_init_skips_config_loading() {
        assert!(ConfigCommand::Init {
            catalog: "products.json".to_string(),
            as_json: false,
            force: false,
        }
        .is_init());
        assert!(!ConfigCommand::Show.is_init());
    }
}
