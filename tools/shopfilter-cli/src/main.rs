//! Shop filter CLI: inspect and render faceted filter requests.
//!
//! Commands:
//! - `shopfilter decode` - Decode a query string into facet state
//! - `shopfilter next-url` - Build the URL a filter change leads to
//! - `shopfilter render` - Render the filter sidebar against a catalog
//! - `shopfilter bounds` - Show the price slider bounds
//! - `shopfilter title` - Print the listing title for a query
//! - `shopfilter config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod sections;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BoundsArgs, ConfigArgs, DecodeArgs, NextUrlArgs, RenderArgs, TitleArgs};

/// Shop filter CLI - Decode, navigate and render faceted product filters
#[derive(Parser)]
#[command(name = "shopfilter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a query string into facet state
    Decode(DecodeArgs),

    /// Build the URL a filter change leads to
    NextUrl(NextUrlArgs),

    /// Render the filter sidebar for a request
    Render(RenderArgs),

    /// Show the price slider bounds for a request
    Bounds(BoundsArgs),

    /// Print the listing title for a query
    Title(TitleArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Decode(args) => commands::decode::run(args, &ctx),
        Commands::NextUrl(args) => commands::next_url::run(args, &ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Bounds(args) => commands::bounds::run(args, &ctx),
        Commands::Title(args) => commands::title::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_next_url_intent() {
        let cli = Cli::try_parse_from([
            "shopfilter",
            "next-url",
            "/shop/?product_categories=shoes",
            "price",
            "--min",
            "10",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::NextUrl(_)));
    }
}
