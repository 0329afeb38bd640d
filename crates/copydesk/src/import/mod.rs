//! Import trigger: turn a purchased article into a local draft.
//!
//! Unlike the catalog endpoints, the import endpoint is local to the
//! installation (the site's own admin endpoint) and takes a form-encoded
//! POST rather than a `json=` query object.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{ApiError, Error};
use crate::types::{ArticleKey, LicenseKey};

/// Action value carried in the import form.
const ACTION_IMPORT: &str = "import";

/// Ceiling applied to the import request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Form body for the import trigger.
#[derive(Debug, Serialize)]
struct ImportForm<'a> {
    action: &'a str,
    key: &'a str,
    license: &'a str,
}

/// Raw response from the import endpoint.
#[derive(Debug, Deserialize)]
pub struct ImportResponse {
    /// Created draft id; `0` signals a message-only result.
    pub id: u64,
    pub msg: String,
    #[serde(default)]
    pub draft_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Outcome of an import, with the `id == 0` sentinel resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Nothing was created; the server only has a message to show.
    Notice { msg: String },
    /// A draft was created.
    DraftCreated {
        id: u64,
        msg: String,
        draft_url: Option<String>,
        title: Option<String>,
        summary: Option<String>,
    },
}

impl From<ImportResponse> for ImportOutcome {
    fn from(response: ImportResponse) -> Self {
        if response.id == 0 {
            ImportOutcome::Notice { msg: response.msg }
        } else {
            ImportOutcome::DraftCreated {
                id: response.id,
                msg: response.msg,
                draft_url: response.draft_url,
                title: response.title,
                summary: response.summary,
            }
        }
    }
}

/// Client for the local import endpoint.
#[derive(Debug, Clone)]
pub struct Importer {
    client: reqwest::Client,
    endpoint: Url,
}

impl Importer {
    /// Create an importer targeting the given admin endpoint URL.
    pub fn new(endpoint: Url) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("copydesk/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self { client, endpoint }
    }

    /// Returns the endpoint URL this importer posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Trigger an import of the given purchased article.
    #[instrument(skip(self, license), fields(endpoint = %self.endpoint))]
    pub async fn import(
        &self,
        key: &ArticleKey,
        license: &LicenseKey,
    ) -> Result<ImportOutcome, Error> {
        let form = ImportForm {
            action: ACTION_IMPORT,
            key: key.as_str(),
            license: license.as_str(),
        };
        debug!(key = %key, "import trigger");

        let response = self.client.post(self.endpoint.clone()).form(&form).send().await?;

        let status = response.status();
        if status.is_success() {
            let body = response.json::<ImportResponse>().await?;
            Ok(ImportOutcome::from(body))
        } else {
            let status = status.as_u16();
            let error = match response.json::<crate::api::CatalogErrorResponse>().await {
                Ok(body) => ApiError::new(status, body.error, body.message),
                Err(_) => ApiError::new(status, None, None),
            };
            Err(Error::Api(error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_id_is_message_only() {
        let response: ImportResponse = serde_json::from_value(json!({
            "id": 0,
            "msg": "Already imported."
        }))
        .unwrap();

        assert_eq!(
            ImportOutcome::from(response),
            ImportOutcome::Notice {
                msg: "Already imported.".to_string()
            }
        );
    }

    #[test]
    fn nonzero_id_carries_draft_details() {
        let response: ImportResponse = serde_json::from_value(json!({
            "id": 42,
            "msg": "Import successful.",
            "draft_url": "https://site.example.com/?p=42",
            "title": "Care of Ferns",
            "summary": "A primer on indoor ferns."
        }))
        .unwrap();

        assert_eq!(
            ImportOutcome::from(response),
            ImportOutcome::DraftCreated {
                id: 42,
                msg: "Import successful.".to_string(),
                draft_url: Some("https://site.example.com/?p=42".to_string()),
                title: Some("Care of Ferns".to_string()),
                summary: Some("A primer on indoor ferns.".to_string()),
            }
        );
    }

    #[test]
    fn optional_fields_default_to_none() {
        let response: ImportResponse = serde_json::from_value(json!({
            "id": 7,
            "msg": "Import successful."
        }))
        .unwrap();

        match ImportOutcome::from(response) {
            ImportOutcome::DraftCreated {
                draft_url, title, ..
            } => {
                assert_eq!(draft_url, None);
                assert_eq!(title, None);
            }
            other => panic!("expected DraftCreated, got {:?}", other),
        }
    }
}
