//! Remote catalog API: URL building, endpoint types, and the HTTP client.

mod client;
mod document;
mod endpoints;
mod url;

pub use client::CatalogClient;
pub use document::Document;
pub use endpoints::{
    CatalogErrorResponse, FIND_ARTICLE_BY_TEXT, GET_ALL_PURCHASED, GET_ARTICLE_FOR_PREVIEW,
    ListingResponse, PreviewArgs, PurchasedArgs, SearchArgs,
};
pub use url::build_query_url;
