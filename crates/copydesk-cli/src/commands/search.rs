//! Search command implementation.

use anyhow::{Context, Result};
use clap::Args;

use copydesk::{CatalogClient, ListingController, RowStyle, SearchSource};

use crate::output;
use crate::settings::storage;
use crate::view::CliView;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Query terms
    pub terms: String,

    /// Page to fetch (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Print rows and pagination as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SearchArgs) -> Result<()> {
    // An empty query issues no request
    if args.terms.trim().is_empty() {
        output::error("Enter something to search for.");
        return Ok(());
    }

    tracing::debug!(terms = %args.terms, page = args.page, "search");

    let settings = storage::load_settings().context("Failed to load settings")?;
    let base = settings.api_base().context("Invalid catalog URL")?;
    let ctx = settings.render_context(base.clone());

    let client = CatalogClient::new(base);
    let source = SearchSource::new(client, args.terms.trim());

    let mut listing = ListingController::new(source, CliView::new(args.json), ctx, RowStyle::Search);

    listing.fetch(super::page_offset(args.page)).await;

    Ok(())
}
