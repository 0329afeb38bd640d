//! Library command implementation.

use anyhow::{Context, Result};
use clap::Args;

use copydesk::{
    CatalogClient, FetchOutcome, ListingController, ListingView, Notice, PurchasedSource, RowStyle,
};

use crate::output;
use crate::settings::storage;
use crate::view::CliView;

#[derive(Args, Debug)]
pub struct LibraryArgs {
    /// Page to fetch (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Print rows and pagination as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: LibraryArgs) -> Result<()> {
    let settings = storage::load_settings().context("Failed to load settings")?;

    // Capability gate: refuse before issuing any request
    if !settings.has_valid_license_and_terms() {
        output::error(
            "A valid license key and accepted terms are required to view your library. \
             Run 'copydesk settings set-license' and 'copydesk settings accept-terms'.",
        );
        return Ok(());
    }

    tracing::debug!(page = args.page, "library lookup");

    let base = settings.api_base().context("Invalid catalog URL")?;
    let ctx = settings.render_context(base.clone());
    let license = settings.license().context("License key missing")?;

    let client = CatalogClient::new(base);
    let source = PurchasedSource::new(client, license);

    let mut listing = ListingController::new(source, CliView::new(args.json), ctx, RowStyle::Library);

    let outcome = listing.fetch(super::page_offset(args.page)).await;

    if let FetchOutcome::Page { .. } = outcome {
        listing.view_mut().show_notice(Notice::LibraryLoaded);
    }

    Ok(())
}
