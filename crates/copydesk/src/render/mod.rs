//! Row rendering: pure mapping from catalog documents to displayable rows.
//!
//! The one piece of branching here is the capability gate: without a
//! valid license and accepted terms, every row's action cell becomes a
//! pointer to settings and preview links are withheld. That substitution
//! is a capability decision, not a cosmetic one, and holds for every
//! record in a page.

use url::Url;

use crate::api::{Document, GET_ARTICLE_FOR_PREVIEW, PreviewArgs, build_query_url};
use crate::types::{ApiBaseUrl, ArticleKey, LicenseKey};

/// Inputs the renderer needs beyond the document itself.
///
/// Holding a license here means the capability gate is open: the caller
/// is responsible for only supplying one when the terms have also been
/// accepted.
#[derive(Debug, Clone)]
pub struct RenderContext {
    base: ApiBaseUrl,
    license: Option<LicenseKey>,
}

impl RenderContext {
    /// Context with the capability gate open.
    pub fn licensed(base: ApiBaseUrl, license: LicenseKey) -> Self {
        Self {
            base,
            license: Some(license),
        }
    }

    /// Context with the capability gate closed.
    pub fn unlicensed(base: ApiBaseUrl) -> Self {
        Self {
            base,
            license: None,
        }
    }

    /// Whether purchase/import actions are permitted.
    pub fn is_licensed(&self) -> bool {
        self.license.is_some()
    }

    /// The license key, when the gate is open.
    pub fn license(&self) -> Option<&LicenseKey> {
        self.license.as_ref()
    }
}

/// Which listing variant a row is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    /// Search results: summary, word count, price, purchase action.
    Search,
    /// Purchased library: purchase date, import action.
    Library,
}

/// The action cell of a row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Start a purchase of this article.
    Purchase {
        key: ArticleKey,
        title: String,
        price: Option<String>,
    },
    /// Import this purchased article as a local draft.
    Import { key: ArticleKey },
    /// Gate closed: point the user at settings instead.
    Configure,
}

/// A renderable row descriptor.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Row {
    pub key: ArticleKey,
    pub title: String,
    /// Summary (search) or purchase date (library).
    pub detail: String,
    pub word_count: Option<u64>,
    pub price: Option<String>,
    /// Preview link; only present when the gate is open.
    pub preview: Option<Url>,
    pub action: Action,
}

/// Render a document in the given style.
pub fn row(style: RowStyle, ctx: &RenderContext, doc: &Document) -> Row {
    match style {
        RowStyle::Search => search_row(ctx, doc),
        RowStyle::Library => library_row(ctx, doc),
    }
}

/// Render a search result row.
pub fn search_row(ctx: &RenderContext, doc: &Document) -> Row {
    let action = match ctx.license() {
        Some(_) => Action::Purchase {
            key: doc.key.clone(),
            title: doc.title().to_string(),
            price: doc.price(),
        },
        None => Action::Configure,
    };

    Row {
        key: doc.key.clone(),
        title: doc.title().to_string(),
        detail: doc.summary().unwrap_or_default().to_string(),
        word_count: doc.word_count(),
        price: doc.price(),
        preview: preview_url(ctx, &doc.key),
        action,
    }
}

/// Render a purchased-library row.
pub fn library_row(ctx: &RenderContext, doc: &Document) -> Row {
    let action = match ctx.license() {
        Some(_) => Action::Import {
            key: doc.key.clone(),
        },
        None => Action::Configure,
    };

    Row {
        key: doc.key.clone(),
        title: doc.title().to_string(),
        detail: doc.purchased_date().unwrap_or_default(),
        word_count: None,
        price: None,
        preview: None,
        action,
    }
}

fn preview_url(ctx: &RenderContext, key: &ArticleKey) -> Option<Url> {
    let license = ctx.license()?;
    let args = PreviewArgs {
        article_key: key.as_str(),
        license_key: license.as_str(),
    };
    build_query_url(&ctx.base, GET_ARTICLE_FOR_PREVIEW, &args).ok()
}
