//! Shopfront CLI - drive the storefront logic from the terminal.
//!
//! Commands:
//! - `shopfront suggest` - Show the search dropdown for a query
//! - `shopfront search` - Show the product listing for a query
//! - `shopfront open` - Resolve a storefront URL to its page
//! - `shopfront checkout` - Show checkout state for a set of signals
//! - `shopfront card` - Detect a card brand and mask the number
//! - `shopfront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CardArgs, CheckoutArgs, ConfigArgs, OpenArgs, SearchArgs, SuggestArgs};

/// Shopfront CLI - search and checkout against a product catalog
#[derive(Parser)]
#[command(name = "shopfront")]
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
    /// Show dropdown suggestions for a query
    Suggest(SuggestArgs),

    /// Show the product listing for a search
    Search(SearchArgs),

    /// Resolve a storefront URL
    Open(OpenArgs),

    /// Show the checkout step for the given signals
    Checkout(CheckoutArgs),

    /// Detect a card brand and mask the number
    Card(CardArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "shopfront_commerce=trace,shopfront=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match &cli.command {
        Commands::Config(args) if args.command.is_init() => {
            context::Context::without_config(output)?
        }
        _ => context::Context::load(cli.config.as_deref(), output)?,
    };

    let result = match cli.command {
        Commands::Suggest(args) => commands::suggest::run(args, &ctx),
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Open(args) => commands::open::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Card(args) => commands::card::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
