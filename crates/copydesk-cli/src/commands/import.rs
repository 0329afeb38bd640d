//! Import command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use url::Url;

use copydesk::{ArticleKey, ImportOutcome, Importer};

use crate::output;
use crate::settings::storage;

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Key of the purchased article to import
    pub key: String,
}

pub async fn run(args: ImportArgs) -> Result<()> {
    let settings = storage::load_settings().context("Failed to load settings")?;

    // Capability gate: refuse before issuing any request
    if !settings.has_valid_license_and_terms() {
        output::error(
            "A valid license key and accepted terms are required to import content. \
             Run 'copydesk settings set-license' and 'copydesk settings accept-terms'.",
        );
        return Ok(());
    }

    let Some(import_url) = settings.import_url.as_deref() else {
        bail!("No import endpoint configured. Run 'copydesk settings set-import-url' first.");
    };
    let endpoint = Url::parse(import_url).context("Invalid import endpoint URL")?;

    let key = ArticleKey::new(&args.key).context("Invalid article key")?;
    let license = settings.license().context("License key missing")?;

    let importer = Importer::new(endpoint);
    let outcome = importer
        .import(&key, &license)
        .await
        .context("Import failed")?;

    match outcome {
        ImportOutcome::Notice { msg } => {
            println!("{}", msg);
        }
        ImportOutcome::DraftCreated {
            msg,
            draft_url,
            title,
            summary,
            ..
        } => {
            output::success(&msg);
            println!();
            if let Some(title) = title {
                output::field("Title", &title);
            }
            if let Some(summary) = summary {
                output::field("Summary", &summary);
            }
            if let Some(draft_url) = draft_url {
                output::field("Draft", &draft_url);
            }
        }
    }

    Ok(())
}
