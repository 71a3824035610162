//! Configuration management commands.

use anyhow::{bail, Result};
use shopfilter_core::config::TermListConfig;
use shopfilter_core::facet::form_action;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { base_url, force } => init_config(&base_url, force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[site]");
    ctx.output
        .kv("base_url", ctx.config.site.base_url.as_deref().unwrap_or("-"));
    ctx.output
        .kv("catalog", ctx.config.site.catalog.as_deref().unwrap_or("-"));

    ctx.output.info("[logging]");
    ctx.output
        .kv("level", &ctx.config.logging.level.to_string().to_lowercase());
    ctx.output
        .kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    let filters = &ctx.config.filters;
    ctx.output.info("[filters]");
    ctx.output.kv("currency", filters.currency.code());

    show_term_list("[filters.categories]", &filters.categories, ctx);
    show_term_list("[filters.tags]", &filters.tags, ctx);

    ctx.output.info("[filters.price]");
    ctx.output.kv("enabled", &filters.price.enabled.to_string());
    ctx.output.kv("title", &filters.price.title);

    ctx.output.info("[filters.submit]");
    ctx.output.kv("enabled", &filters.submit.enabled.to_string());
    ctx.output.kv("title", &filters.submit.title);

    Ok(())
}

fn show_term_list(section: &str, list: &TermListConfig, ctx: &Context) {
    ctx.output.info(section);
    ctx.output.kv("enabled", &list.enabled.to_string());
    if let Some(title) = &list.title {
        ctx.output.kv("title", title);
    }
    ctx.output
        .kv("orderby", &format!("{:?}", list.orderby).to_lowercase());
    ctx.output.kv("count", &list.count.to_string());
    if let Some(hierarchical) = list.hierarchical {
        ctx.output.kv("hierarchical", &hierarchical.to_string());
    }
    ctx.output
        .kv("show_children_only", &list.show_children_only.to_string());
    ctx.output.kv("hide_empty", &list.hide_empty.to_string());
    if !list.only.is_empty() {
        ctx.output.kv("only", &list.only.join(", "));
    }
}

fn init_config(base_url: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config(base_url))?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check(ctx);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }
    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");
    Ok(())
}

fn check(ctx: &Context) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if let Some(base_url) = &ctx.config.site.base_url {
        if form_action(base_url) != *base_url {
            warnings.push(format!(
                "site.base_url '{}' carries a query or page segment; links use '{}'",
                base_url,
                form_action(base_url)
            ));
        }
    }

    if let Some(catalog) = &ctx.config.site.catalog {
        if !ctx.resolve_config_path(catalog).exists() {
            errors.push(format!("site.catalog '{}' does not exist", catalog));
        }
    }

    let filters = &ctx.config.filters;
    for (name, list) in [("categories", &filters.categories), ("tags", &filters.tags)] {
        if list.only.iter().any(|s| s.trim().is_empty()) {
            errors.push(format!("filters.{}.only contains an empty entry", name));
        }
        if !list.enabled && list.title.is_some() {
            warnings.push(format!("filters.{} is disabled but has a title", name));
        }
    }

    if !filters.categories.enabled
        && !filters.tags.enabled
        && !filters.price.enabled
        && !filters.submit.enabled
    {
        warnings.push("every filter is disabled; the sidebar renders nothing".to_string());
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::output::Output;
    use std::path::PathBuf;

    fn context(config: CliConfig) -> Context {
        Context {
            config,
            output: Output::new(false, true),
            cwd: PathBuf::from("/nonexistent"),
            config_path: None,
        }
    }

    #[test]
    fn test_default_config_is_clean() {
        let (errors, warnings) = check(&context(CliConfig::default()));
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        let mut config = CliConfig::default();
        config.site.catalog = Some("missing.json".to_string());
        let (errors, _) = check(&context(config));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_base_url_with_query_warns() {
        let mut config = CliConfig::default();
        config.site.base_url = Some("/shop/page/2/?s=x".to_string());
        let (errors, warnings) = check(&context(config));
        assert!(errors.is_empty());
        assert!(warnings[0].contains("'/shop/'"));
    }
}
