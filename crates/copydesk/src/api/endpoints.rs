//! Catalog endpoint definitions and request/response types.

use serde::{Deserialize, Serialize};

use super::Document;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// Full-text search over the catalog.
pub const FIND_ARTICLE_BY_TEXT: &str = "find/article/by_text";

/// Everything purchased under a license key.
pub const GET_ALL_PURCHASED: &str = "get/article/all_purchased";

/// Preview of a single article.
pub const GET_ARTICLE_FOR_PREVIEW: &str = "get/article/for_preview";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Arguments for a catalog text search.
#[derive(Debug, Serialize)]
pub struct SearchArgs<'a> {
    pub query_terms: &'a str,
    pub offset: u32,
    pub max_items: u32,
}

/// Arguments for a purchased-library lookup.
#[derive(Debug, Serialize)]
pub struct PurchasedArgs<'a> {
    pub license_key: &'a str,
    pub offset: u32,
    pub max_items: u32,
}

/// Arguments for an article preview link.
#[derive(Debug, Serialize)]
pub struct PreviewArgs<'a> {
    pub article_key: &'a str,
    pub license_key: &'a str,
}

/// Response from either listing endpoint.
///
/// `count` is the total size of the remote collection, not the length
/// of `results`; it is server-trusted and not verified here.
#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    pub results: Vec<Document>,
    pub count: u64,
}

/// Catalog error response format.
#[derive(Debug, Deserialize)]
pub struct CatalogErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
}
