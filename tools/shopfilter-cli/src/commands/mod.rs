//! CLI command implementations.

pub mod bounds;
pub mod config;
pub mod decode;
pub mod next_url;
pub mod render;
pub mod title;

use clap::{Args, Subcommand, ValueEnum};

/// Arguments for the decode command.
#[derive(Args)]
pub struct DecodeArgs {
    /// Query string or URL to decode.
    pub query: String,
}

/// Arguments for the next-url command.
#[derive(Args)]
pub struct NextUrlArgs {
    /// Current page URL, or a bare query string against `[site] base_url`.
    pub url: String,

    #[command(subcommand)]
    pub intent: IntentCommand,
}

#[derive(Subcommand)]
pub enum IntentCommand {
    /// Select or deselect a category.
    ToggleCategory {
        /// Category slug.
        slug: String,
    },
    /// Select or deselect a tag.
    ToggleTag {
        /// Tag slug.
        slug: String,
    },
    /// Replace the selected categories.
    SetCategories {
        /// Category slugs.
        slugs: Vec<String>,
    },
    /// Replace the selected tags.
    SetTags {
        /// Tag slugs.
        slugs: Vec<String>,
    },
    /// Set the price range.
    Price {
        /// Lower bound.
        #[arg(long)]
        min: Option<f64>,

        /// Upper bound.
        #[arg(long)]
        max: Option<f64>,
    },
    /// Remove the price range.
    ClearPrice,
    /// Change the sort order.
    Sort {
        /// `orderby` value (menu_order, popularity, rating, date, price, price-desc, title).
        key: String,
    },
    /// Drop every filter.
    Reset,
}

/// Output format for the render command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Filter payload as JSON.
    Json,
    /// Sidebar markup.
    Html,
    /// Readable summary.
    Text,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Current page URL, or a bare query string against `[site] base_url`.
    pub url: String,

    /// Catalog snapshot (JSON). Defaults to `[site] catalog`.
    #[arg(long)]
    pub catalog: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = RenderFormat::Text)]
    pub format: RenderFormat,
}

/// Arguments for the bounds command.
#[derive(Args)]
pub struct BoundsArgs {
    /// Current page URL, or a bare query string.
    #[arg(default_value = "")]
    pub url: String,

    /// Catalog snapshot (JSON). Defaults to `[site] catalog`.
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for the title command.
#[derive(Args)]
pub struct TitleArgs {
    /// Query string or URL.
    pub query: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Shop page URL to write into `[site] base_url`.
        #[arg(long, default_value = "/shop/")]
        base_url: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// The query string of a command argument that may be a URL or a bare query.
pub(crate) fn query_part(input: &str) -> &str {
    if input.contains('?') {
        shopfilter_core::facet::query_of(input)
    } else if input.starts_with('/') || input.contains("://") {
        ""
    } else {
        input
    }
}
