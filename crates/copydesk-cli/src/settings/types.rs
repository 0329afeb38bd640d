//! CLI settings types.

use copydesk::{ApiBaseUrl, LicenseKey, RenderContext};
use serde::{Deserialize, Serialize};

/// Catalog URL used when none has been configured.
pub const DEFAULT_API_URL: &str = "https://api.copydesk.dev";

/// Persisted CLI settings.
///
/// `has_valid_license_and_terms` is the capability gate: purchase and
/// import actions are only offered when a license key is stored AND the
/// content terms have been accepted.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Catalog API base URL; falls back to [`DEFAULT_API_URL`].
    #[serde(default)]
    pub api_url: Option<String>,

    /// Local import endpoint URL.
    #[serde(default)]
    pub import_url: Option<String>,

    /// Catalog license key.
    #[serde(default)]
    pub license_key: Option<String>,

    /// Whether the content terms have been accepted.
    #[serde(default)]
    pub terms_accepted: bool,
}

impl Settings {
    /// The configured catalog base URL, validated.
    pub fn api_base(&self) -> copydesk::Result<ApiBaseUrl> {
        ApiBaseUrl::new(self.api_url.as_deref().unwrap_or(DEFAULT_API_URL))
    }

    /// The stored license key, if present and well-formed.
    pub fn license(&self) -> Option<LicenseKey> {
        self.license_key
            .as_deref()
            .and_then(|key| LicenseKey::new(key).ok())
    }

    /// The capability gate: valid license key and accepted terms.
    pub fn has_valid_license_and_terms(&self) -> bool {
        self.license().is_some() && self.terms_accepted
    }

    /// Build a render context reflecting the capability gate.
    pub fn render_context(&self, base: ApiBaseUrl) -> RenderContext {
        if self.terms_accepted {
            if let Some(license) = self.license() {
                return RenderContext::licensed(base, license);
            }
        }
        RenderContext::unlicensed(base)
    }
}
