//! Pagination state derived from a fetched page.

/// Pagination state for one successfully fetched page.
///
/// Derived, never stored independently: recomputed from
/// `(offset, page_size, total)` on every successful fetch and handed to
/// the view fresh, so stale navigation targets cannot accumulate.
///
/// [`PaginationState::compute`] returns `None` when the whole collection
/// fits in a single page (`total < page_size`); the view hides its
/// pagination controls entirely in that case, regardless of offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PaginationState {
    current_page: u32,
    total_pages: u32,
    total: u64,
    offset: u32,
    page_size: u32,
}

impl PaginationState {
    /// Compute pagination for a page fetched at `offset`.
    ///
    /// `page_size` must be nonzero. Returns `None` for the single-page
    /// case (`total < page_size`).
    pub fn compute(offset: u32, page_size: u32, total: u64) -> Option<Self> {
        debug_assert!(page_size > 0);

        if total < u64::from(page_size) {
            return None;
        }

        let current_page = offset / page_size + 1;
        // A server-reported total can exceed what fits in u32 pages;
        // saturate rather than truncate.
        let total_pages =
            u32::try_from(total.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX);

        Some(Self {
            current_page,
            total_pages,
            total,
            offset,
            page_size,
        })
    }

    /// One-based index of the current page.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Total number of pages in the remote collection.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Total number of records in the remote collection (server-trusted).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Whether the "previous" control is enabled.
    pub fn prev_enabled(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the "next" control is enabled.
    pub fn next_enabled(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Offset of the previous page, if there is one.
    pub fn prev_offset(&self) -> Option<u32> {
        self.prev_enabled().then(|| self.offset - self.page_size)
    }

    /// Offset of the next page, if there is one.
    pub fn next_offset(&self) -> Option<u32> {
        self.next_enabled().then(|| self.offset + self.page_size)
    }
}
