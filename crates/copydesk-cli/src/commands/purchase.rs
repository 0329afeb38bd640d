//! Purchase command implementation.
//!
//! Prepares the payment-form values for a single article. The payment
//! itself happens on the provider's site; this prints exactly what the
//! form needs.

use anyhow::{Context, Result};
use clap::Args;

use copydesk::{ArticleKey, PurchaseOrder};

use crate::output;
use crate::settings::storage;

#[derive(Args, Debug)]
pub struct PurchaseArgs {
    /// Key of the article to purchase
    pub key: String,

    /// Article title (as listed in the search results)
    #[arg(long)]
    pub title: String,

    /// Listed price
    #[arg(long)]
    pub price: Option<String>,

    /// Domain the purchase is made for
    #[arg(long)]
    pub domain: String,
}

pub async fn run(args: PurchaseArgs) -> Result<()> {
    let settings = storage::load_settings().context("Failed to load settings")?;

    // Capability gate: refuse before preparing anything
    if !settings.has_valid_license_and_terms() {
        output::error(
            "A valid license key and accepted terms are required to purchase content. \
             Run 'copydesk settings set-license' and 'copydesk settings accept-terms'.",
        );
        return Ok(());
    }

    let key = ArticleKey::new(&args.key).context("Invalid article key")?;
    let license = settings.license();

    let order = PurchaseOrder::single(
        &key,
        &args.title,
        args.price.clone(),
        license.as_ref(),
        &args.domain,
    )
    .context("Failed to prepare purchase")?;

    println!("About to purchase \"{}\".", order.item_name);
    println!();
    output::field("Item name", &order.item_name);
    if let Some(ref amount) = order.item_amount {
        output::field("Amount", &format!("$ {}", amount));
    }
    output::field("Custom", &order.custom_json()?);

    Ok(())
}
