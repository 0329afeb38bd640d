//! Listing view trait: what the controller drives.

use crate::render::Row;

use super::PaginationState;

/// Informational notices a listing can surface.
///
/// Localized wording is the view's concern; the controller only names
/// the condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A search returned nothing.
    NoResults,
    /// The library holds no purchases.
    NoPurchases,
    /// The remote catalog could not be reached (or answered garbage).
    FailedToConnect,
    /// The library finished loading. Raised by callers after a
    /// successful fetch; the controller itself never emits it.
    LibraryLoaded,
}

/// Rendering collaborator for one listing.
///
/// The controller calls these in a fixed order per fetch: controls are
/// disabled and a loading state shown before dispatch, then exactly one
/// of rows + pagination, notice, or failure notice lands, and controls
/// are re-enabled last. Implementations hold no pagination logic; they
/// display whatever state they are handed.
pub trait ListingView {
    /// Enable or disable the controls that can trigger a fetch.
    ///
    /// Disabled for the whole in-flight window; this is what upholds the
    /// at-most-one-request-per-listing invariant on the UI side.
    fn set_controls_enabled(&mut self, enabled: bool);

    /// A fetch has been dispatched; clear old rows and show progress.
    fn show_loading(&mut self);

    /// Display the rows of a fetched page, replacing previous rows.
    fn show_rows(&mut self, rows: &[Row]);

    /// Display an informational notice in place of (or alongside) rows.
    fn show_notice(&mut self, notice: Notice);

    /// Display pagination state; `None` hides the controls entirely.
    fn show_pagination(&mut self, state: Option<&PaginationState>);
}
