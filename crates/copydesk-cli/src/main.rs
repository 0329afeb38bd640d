//! copydesk - CLI front-end for the copydesk content marketplace.
//!
//! This is a thin wrapper over the `copydesk` library: search the
//! catalog, browse the purchased library, import purchases as local
//! drafts, and manage settings.

mod cli;
mod commands;
mod output;
mod settings;
mod view;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::Search(args) => commands::search::run(args).await,
        Commands::Library(args) => commands::library::run(args).await,
        Commands::Purchase(args) => commands::purchase::run(args).await,
        Commands::Import(args) => commands::import::run(args).await,
        Commands::Settings(cmd) => commands::settings::handle(cmd).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
