//! CLI command implementations.

pub mod card;
pub mod checkout;
pub mod config;
pub mod open;
pub mod search;
pub mod suggest;

use clap::{Args, Subcommand};

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Text typed into the search bar.
    pub query: String,

    /// Also submit the query and print where the bar navigates.
    #[arg(long)]
    pub submit: bool,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search term. Omit to list every product.
    pub query: Option<String>,

    /// Treat the term as a raw, still-encoded `search` parameter value.
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the open command.
#[derive(Args)]
pub struct OpenArgs {
    /// Storefront URL or path, e.g. `/products?search=red%20shoe`.
    pub url: String,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Product being bought.
    #[arg(short, long)]
    pub product: u64,

    /// Selected billing address.
    #[arg(short, long)]
    pub address: Option<u64>,

    /// A card has been put on file.
    #[arg(long)]
    pub card_created: bool,

    /// The charge went through.
    #[arg(long)]
    pub charged: bool,
}

/// Arguments for the card command.
#[derive(Args)]
pub struct CardArgs {
    /// Card number; spaces and dashes are allowed.
    pub number: String,
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
        /// Catalog path to write into the config.
        #[arg(long, default_value = "products.json")]
        catalog: String,

        /// Write `shopfront.json` instead of `shopfront.toml`.
        #[arg(long = "as-json")]
        as_json: bool,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

impl ConfigCommand {
    /// `config init` writes a fresh file and never reads the existing one.
    pub fn is_init(&self) -> bool {
        matches!(self, ConfigCommand::Init { .. })
    }
}
