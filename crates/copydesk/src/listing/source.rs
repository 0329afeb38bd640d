//! Page sources: where a listing's records come from.

use async_trait::async_trait;

use crate::Result;
use crate::api::{CatalogClient, Document};
use crate::types::LicenseKey;

/// One page of a remote listing.
///
/// `records` preserves server order. `count` is the total size of the
/// remote collection, of which this page is a window starting at
/// `offset`.
#[derive(Debug)]
pub struct ListingPage {
    pub records: Vec<Document>,
    pub count: u64,
    pub offset: u32,
}

/// A paginated remote collection.
///
/// Implementations issue exactly one request per call and do not retry.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page of up to `max_items` records starting at `offset`.
    async fn fetch_page(&self, offset: u32, max_items: u32) -> Result<ListingPage>;
}

/// Text search over the catalog.
#[derive(Debug, Clone)]
pub struct SearchSource {
    client: CatalogClient,
    terms: String,
}

impl SearchSource {
    /// Create a source searching for the given query terms.
    pub fn new(client: CatalogClient, terms: impl Into<String>) -> Self {
        Self {
            client,
            terms: terms.into(),
        }
    }

    /// The query terms this source searches for.
    pub fn terms(&self) -> &str {
        &self.terms
    }
}

#[async_trait]
impl PageSource for SearchSource {
    async fn fetch_page(&self, offset: u32, max_items: u32) -> Result<ListingPage> {
        let response = self.client.search(&self.terms, offset, max_items).await?;
        Ok(ListingPage {
            records: response.results,
            count: response.count,
            offset,
        })
    }
}

/// The purchased-content library for a license key.
#[derive(Debug, Clone)]
pub struct PurchasedSource {
    client: CatalogClient,
    license: LicenseKey,
}

impl PurchasedSource {
    /// Create a source listing purchases under the given license.
    pub fn new(client: CatalogClient, license: LicenseKey) -> Self {
        Self { client, license }
    }
}

#[async_trait]
impl PageSource for PurchasedSource {
    async fn fetch_page(&self, offset: u32, max_items: u32) -> Result<ListingPage> {
        let response = self
            .client
            .purchased(&self.license, offset, max_items)
            .await?;
        Ok(ListingPage {
            records: response.results,
            count: response.count,
            offset,
        })
    }
}
