//! The pagination/listing controller.
//!
//! One [`ListingController`] owns one listing's paging cursor and
//! orchestrates fetch → render → re-paginate against a [`PageSource`]
//! and a [`ListingView`]. Search and library listings are instances of
//! the same controller configured with a different source and row
//! style, not separate implementations.

mod pagination;
mod source;
mod view;

pub use pagination::PaginationState;
pub use source::{ListingPage, PageSource, PurchasedSource, SearchSource};
pub use view::{ListingView, Notice};

use tracing::{debug, warn};

use crate::render::{self, RenderContext, RowStyle};

/// Records requested per fetch.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Result of one fetch cycle, for callers driving navigation.
///
/// Completion is delivered as this single value rather than through
/// success/failure callbacks, so the one-in-flight-fetch invariant is
/// testable without an event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A non-empty page was rendered.
    Page {
        current_page: u32,
        total_pages: u32,
    },
    /// The server answered with zero records.
    Empty,
    /// Transport or API failure; the offset is preserved for a retry.
    Failed,
    /// Navigation was requested but the corresponding control is
    /// disabled (or nothing has been fetched yet). No request issued.
    NotReady,
}

/// Controller for one server-paginated listing.
///
/// Holds the offset cursor, the fixed page size, and the pagination
/// state derived from the last successful fetch. Taking `&mut self` for
/// [`fetch`](Self::fetch) makes a second concurrent fetch on the same
/// controller unrepresentable; the view's controls are additionally
/// disabled for the in-flight window and re-enabled only from the
/// completion path.
pub struct ListingController<S, V> {
    source: S,
    view: V,
    ctx: RenderContext,
    style: RowStyle,
    page_size: u32,
    offset: u32,
    pagination: Option<PaginationState>,
}

impl<S: PageSource, V: ListingView> ListingController<S, V> {
    /// Create a controller with the default page size.
    pub fn new(source: S, view: V, ctx: RenderContext, style: RowStyle) -> Self {
        Self::with_page_size(source, view, ctx, style, DEFAULT_PAGE_SIZE)
    }

    /// Create a controller with an explicit page size (nonzero).
    pub fn with_page_size(
        source: S,
        view: V,
        ctx: RenderContext,
        style: RowStyle,
        page_size: u32,
    ) -> Self {
        assert!(page_size > 0, "page size must be nonzero");
        Self {
            source,
            view,
            ctx,
            style,
            page_size,
            offset: 0,
            pagination: None,
        }
    }

    /// The offset of the most recently requested page.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// The fixed page size.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Pagination state from the last successful fetch, if any.
    pub fn pagination(&self) -> Option<&PaginationState> {
        self.pagination.as_ref()
    }

    /// Borrow the view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutably borrow the view, for messages beyond the fetch cycle.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Fetch the page at `offset` and drive the view with the result.
    ///
    /// The offset is taken as given; navigation via [`prev`](Self::prev)
    /// and [`next`](Self::next) only derives offsets from previously
    /// computed pagination state, so out-of-range values cannot arise
    /// through the controls.
    pub async fn fetch(&mut self, offset: u32) -> FetchOutcome {
        self.offset = offset;

        self.view.set_controls_enabled(false);
        self.view.show_loading();

        match self.source.fetch_page(offset, self.page_size).await {
            Ok(page) => self.on_page_ready(page),
            Err(error) => self.on_failure(&error),
        }
    }

    /// Re-fetch the page the cursor currently points at.
    pub async fn refetch(&mut self) -> FetchOutcome {
        self.fetch(self.offset).await
    }

    /// Fetch the previous page, if the control is enabled.
    pub async fn prev(&mut self) -> FetchOutcome {
        match self.pagination.as_ref().and_then(PaginationState::prev_offset) {
            Some(offset) => self.fetch(offset).await,
            None => FetchOutcome::NotReady,
        }
    }

    /// Fetch the next page, if the control is enabled.
    pub async fn next(&mut self) -> FetchOutcome {
        match self.pagination.as_ref().and_then(PaginationState::next_offset) {
            Some(offset) => self.fetch(offset).await,
            None => FetchOutcome::NotReady,
        }
    }

    fn on_page_ready(&mut self, page: ListingPage) -> FetchOutcome {
        if page.records.is_empty() {
            debug!(offset = page.offset, "empty page");
            // No pagination recompute for an empty page; hide any
            // previously shown controls rather than leave them stale.
            self.pagination = None;
            self.view.show_pagination(None);
            self.view.show_notice(self.empty_notice());
            self.view.set_controls_enabled(true);
            return FetchOutcome::Empty;
        }

        debug!(
            offset = page.offset,
            records = page.records.len(),
            count = page.count,
            "page ready"
        );

        let rows: Vec<_> = page
            .records
            .iter()
            .map(|doc| render::row(self.style, &self.ctx, doc))
            .collect();
        self.view.show_rows(&rows);

        self.recompute_pagination(page.count);
        self.view.set_controls_enabled(true);

        match self.pagination {
            Some(p) => FetchOutcome::Page {
                current_page: p.current_page(),
                total_pages: p.total_pages(),
            },
            None => FetchOutcome::Page {
                current_page: 1,
                total_pages: 1,
            },
        }
    }

    fn recompute_pagination(&mut self, total: u64) {
        self.pagination = PaginationState::compute(self.offset, self.page_size, total);
        self.view.show_pagination(self.pagination.as_ref());
    }

    fn on_failure(&mut self, error: &crate::Error) -> FetchOutcome {
        warn!(offset = self.offset, error = %error, "fetch failed");
        // Offset stays as requested so a manual retry targets the same
        // page. No automatic retry.
        self.view.show_notice(Notice::FailedToConnect);
        self.view.set_controls_enabled(true);
        FetchOutcome::Failed
    }

    fn empty_notice(&self) -> Notice {
        match self.style {
            RowStyle::Search => Notice::NoResults,
            RowStyle::Library => Notice::NoPurchases,
        }
    }
}
