//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::settings::SettingsCommand;
use crate::commands::{import, library, purchase, search};

/// Content marketplace client: search, library, import.
#[derive(Parser, Debug)]
#[command(name = "copydesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the catalog
    Search(search::SearchArgs),

    /// Browse purchased content
    Library(library::LibraryArgs),

    /// Prepare a purchase of an article
    Purchase(purchase::PurchaseArgs),

    /// Import a purchased article as a local draft
    Import(import::ImportArgs),

    /// Manage license key, terms, and endpoint settings
    Settings(SettingsCommand),
}
