//! Catalog HTTP client implementation.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};
use url::Url;

use crate::error::{ApiError, Error};
use crate::types::{ApiBaseUrl, ArticleKey, LicenseKey};

use super::endpoints::{
    CatalogErrorResponse, FIND_ARTICLE_BY_TEXT, GET_ALL_PURCHASED, GET_ARTICLE_FOR_PREVIEW,
    ListingResponse, PreviewArgs, PurchasedArgs, SearchArgs,
};
use super::url::build_query_url;

/// Ceiling applied to every catalog request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the remote catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base: ApiBaseUrl,
}

impl CatalogClient {
    /// Create a new catalog client for the given base URL.
    pub fn new(base: ApiBaseUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("copydesk/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self { client, base }
    }

    /// Returns the base URL this client is configured for.
    pub fn base(&self) -> &ApiBaseUrl {
        &self.base
    }

    /// Make a catalog query (GET request with a `json=` argument object).
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn query<Q, R>(&self, endpoint: &str, args: &Q) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = build_query_url(&self.base, endpoint, args)?;
        debug!(endpoint, "catalog query");
        trace!(?args, "query arguments");

        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }

    /// Search the catalog by text.
    pub async fn search(
        &self,
        query_terms: &str,
        offset: u32,
        max_items: u32,
    ) -> Result<ListingResponse, Error> {
        let args = SearchArgs {
            query_terms,
            offset,
            max_items,
        };
        self.query(FIND_ARTICLE_BY_TEXT, &args).await
    }

    /// List articles purchased under a license key.
    pub async fn purchased(
        &self,
        license: &LicenseKey,
        offset: u32,
        max_items: u32,
    ) -> Result<ListingResponse, Error> {
        let args = PurchasedArgs {
            license_key: license.as_str(),
            offset,
            max_items,
        };
        self.query(GET_ALL_PURCHASED, &args).await
    }

    /// Build the preview URL for an article. No request is issued.
    pub fn preview_url(&self, article: &ArticleKey, license: &LicenseKey) -> Result<Url, Error> {
        let args = PreviewArgs {
            article_key: article.as_str(),
            license_key: license.as_str(),
        };
        build_query_url(&self.base, GET_ARTICLE_FOR_PREVIEW, &args)
    }

    /// Handle a catalog response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "catalog response");

        if status.is_success() {
            let body = response.json::<R>().await?;
            Ok(body)
        } else {
            let error = self.parse_error_response(response).await;
            Err(Error::Api(error))
        }
    }

    /// Parse a catalog error response.
    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        // Try to parse as the catalog error format
        match response.json::<CatalogErrorResponse>().await {
            Ok(error_body) => ApiError::new(status, error_body.error, error_body.message),
            Err(_) => ApiError::new(status, None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let base = ApiBaseUrl::new("https://api.example.com").unwrap();
        let client = CatalogClient::new(base.clone());
        assert_eq!(client.base().as_str(), base.as_str());
    }

    #[test]
    fn preview_url_carries_both_keys() {
        let base = ApiBaseUrl::new("https://api.example.com").unwrap();
        let client = CatalogClient::new(base);
        let article = ArticleKey::new("10020251").unwrap();
        let license = LicenseKey::new("abcd-1234").unwrap();

        let url = client.preview_url(&article, &license).unwrap();
        assert_eq!(url.path(), "/get/article/for_preview");

        let (_, value) = url.query_pairs().next().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&value).unwrap();
        assert_eq!(parsed["article_key"], "10020251");
        assert_eq!(parsed["license_key"], "abcd-1234");
    }
}
