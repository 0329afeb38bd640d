//! Settings subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use copydesk::{ApiBaseUrl, LicenseKey};

use crate::output;
use crate::settings::storage;

#[derive(Args, Debug)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub command: SettingsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SettingsSubcommand {
    /// Display the current settings
    Show,

    /// Set the catalog API base URL
    SetApiUrl(SetApiUrlArgs),

    /// Set the local import endpoint URL
    SetImportUrl(SetImportUrlArgs),

    /// Store the catalog license key
    SetLicense(SetLicenseArgs),

    /// Accept the content terms
    AcceptTerms,

    /// Remove all stored settings
    Reset,
}

#[derive(Args, Debug)]
pub struct SetApiUrlArgs {
    /// Catalog API base URL
    pub url: String,
}

#[derive(Args, Debug)]
pub struct SetImportUrlArgs {
    /// Import endpoint URL
    pub url: String,
}

#[derive(Args, Debug)]
pub struct SetLicenseArgs {
    /// License key
    pub key: String,
}

pub async fn handle(cmd: SettingsCommand) -> Result<()> {
    match cmd.command {
        SettingsSubcommand::Show => show(),
        SettingsSubcommand::SetApiUrl(args) => set_api_url(args),
        SettingsSubcommand::SetImportUrl(args) => set_import_url(args),
        SettingsSubcommand::SetLicense(args) => set_license(args),
        SettingsSubcommand::AcceptTerms => accept_terms(),
        SettingsSubcommand::Reset => reset(),
    }
}

fn show() -> Result<()> {
    let settings = storage::load_settings().context("Failed to load settings")?;

    output::field("Catalog URL", settings.api_base()?.as_str());
    output::field(
        "Import endpoint",
        settings.import_url.as_deref().unwrap_or("(not set)"),
    );
    // Never print the key itself
    output::field(
        "License key",
        if settings.license().is_some() {
            "(set)"
        } else {
            "(not set)"
        },
    );
    output::field(
        "Terms accepted",
        if settings.terms_accepted { "yes" } else { "no" },
    );
    output::field(
        "Purchasing enabled",
        if settings.has_valid_license_and_terms() {
            "yes"
        } else {
            "no"
        },
    );

    Ok(())
}

fn set_api_url(args: SetApiUrlArgs) -> Result<()> {
    let url = ApiBaseUrl::new(&args.url).context("Invalid catalog URL")?;

    let mut settings = storage::load_settings().context("Failed to load settings")?;
    settings.api_url = Some(url.to_string());
    storage::save_settings(&settings).context("Failed to save settings")?;

    output::success("Catalog URL saved");
    Ok(())
}

fn set_import_url(args: SetImportUrlArgs) -> Result<()> {
    url::Url::parse(&args.url).context("Invalid import endpoint URL")?;

    let mut settings = storage::load_settings().context("Failed to load settings")?;
    settings.import_url = Some(args.url);
    storage::save_settings(&settings).context("Failed to save settings")?;

    output::success("Import endpoint saved");
    Ok(())
}

fn set_license(args: SetLicenseArgs) -> Result<()> {
    LicenseKey::new(&args.key).context("Invalid license key")?;

    let mut settings = storage::load_settings().context("Failed to load settings")?;
    settings.license_key = Some(args.key);
    storage::save_settings(&settings).context("Failed to save settings")?;

    output::success("License key saved");
    if !settings.terms_accepted {
        println!("Run 'copydesk settings accept-terms' to enable purchasing.");
    }
    Ok(())
}

fn accept_terms() -> Result<()> {
    let mut settings = storage::load_settings().context("Failed to load settings")?;
    settings.terms_accepted = true;
    storage::save_settings(&settings).context("Failed to save settings")?;

    output::success("Terms accepted");
    Ok(())
}

fn reset() -> Result<()> {
    storage::clear_settings().context("Failed to clear settings")?;
    output::success("Settings cleared");
    Ok(())
}
