//! Settings storage for persisting CLI configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use super::Settings;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Get the settings file path.
fn settings_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "copydesk").context("Could not determine config directory")?;

    let config_dir = dirs.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config directory")?;

    Ok(config_dir.join("settings.json"))
}

/// Save settings to disk.
pub fn save_settings(settings: &Settings) -> Result<()> {
    save_to(&settings_path()?, settings)
}

/// Load settings from disk, defaulting when none have been saved.
pub fn load_settings() -> Result<Settings> {
    load_from(&settings_path()?)
}

/// Remove the stored settings.
pub fn clear_settings() -> Result<()> {
    clear_at(&settings_path()?)
}

fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;

    fs::write(path, &json).context("Failed to write settings file")?;

    // The license key is a secret; set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}

fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let json = fs::read_to_string(path).context("Failed to read settings file")?;
    let settings: Settings = serde_json::from_str(&json).context("Invalid settings file")?;

    Ok(settings)
}

fn clear_at(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).context("Failed to remove settings file")?;
    }

    Ok(())
}
