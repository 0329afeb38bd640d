//! copydesk - Content Marketplace Client Library
//!
//! This library talks to a remote content catalog and turns its
//! offset-paginated collections into locally navigable listings. The
//! central piece is the [`ListingController`], which owns one listing's
//! paging cursor and drives fetch → render → re-paginate against a
//! [`PageSource`] (where records come from) and a [`ListingView`] (where
//! rows and pagination go).
//!
//! # Example
//!
//! ```no_run
//! use copydesk::{ApiBaseUrl, CatalogClient, FetchOutcome, ListingController, RenderContext, RowStyle, SearchSource};
//! # use copydesk::{ListingView, Notice, PaginationState, Row};
//! # struct StdoutView;
//! # impl ListingView for StdoutView {
//! #     fn set_controls_enabled(&mut self, _: bool) {}
//! #     fn show_loading(&mut self) {}
//! #     fn show_rows(&mut self, _: &[Row]) {}
//! #     fn show_notice(&mut self, _: Notice) {}
//! #     fn show_pagination(&mut self, _: Option<&PaginationState>) {}
//! # }
//!
//! # async fn example() -> Result<(), copydesk::Error> {
//! let base = ApiBaseUrl::new("https://api.example.com")?;
//! let client = CatalogClient::new(base.clone());
//! let source = SearchSource::new(client, "container gardening");
//! let ctx = RenderContext::unlicensed(base);
//!
//! let mut listing = ListingController::new(source, StdoutView, ctx, RowStyle::Search);
//! if let FetchOutcome::Page { current_page, total_pages } = listing.fetch(0).await {
//!     println!("page {} of {}", current_page, total_pages);
//!     listing.next().await;
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod import;
pub mod listing;
pub mod purchase;
pub mod render;
pub mod types;

// Re-export primary types at crate root for convenience
pub use api::{CatalogClient, Document};
pub use error::Error;
pub use import::{ImportOutcome, Importer};
pub use listing::{
    DEFAULT_PAGE_SIZE, FetchOutcome, ListingController, ListingPage, ListingView, Notice,
    PageSource, PaginationState, PurchasedSource, SearchSource,
};
pub use purchase::PurchaseOrder;
pub use render::{Action, RenderContext, Row, RowStyle};
pub use types::{ApiBaseUrl, ArticleKey, LicenseKey};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
