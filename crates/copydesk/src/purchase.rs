//! Purchase initiation: building the payment-form payload.
//!
//! The actual payment redirect is handled by the payment provider's own
//! form; this module only assembles the values that go into it. Nothing
//! here issues a request.

use serde::Serialize;

use crate::error::Error;
use crate::types::{ArticleKey, LicenseKey};

/// The `custom` field posted alongside a payment: what was bought,
/// under which license, from which site.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PurchaseCustom {
    pub article_keys: Vec<String>,
    pub license_key: String,
    pub purchaser_domain: String,
}

/// A prepared purchase of a single article.
#[derive(Debug, Clone)]
pub struct PurchaseOrder {
    /// Item name shown on the payment page (the article title).
    pub item_name: String,
    /// Item amount, as listed by the catalog.
    pub item_amount: Option<String>,
    custom: PurchaseCustom,
}

impl PurchaseOrder {
    /// Prepare a purchase of one article.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LicenseRequired`] when `license` is absent: a
    /// purchase must not be initiated without a valid license and
    /// accepted terms.
    pub fn single(
        key: &ArticleKey,
        title: impl Into<String>,
        price: Option<String>,
        license: Option<&LicenseKey>,
        purchaser_domain: impl Into<String>,
    ) -> Result<Self, Error> {
        let license = license.ok_or(Error::LicenseRequired)?;

        Ok(Self {
            item_name: title.into(),
            item_amount: price,
            custom: PurchaseCustom {
                article_keys: vec![key.as_str().to_string()],
                license_key: license.as_str().to_string(),
                purchaser_domain: purchaser_domain.into(),
            },
        })
    }

    /// The custom payload.
    pub fn custom(&self) -> &PurchaseCustom {
        &self.custom
    }

    /// The custom payload serialized as JSON, as the payment form wants it.
    pub fn custom_json(&self) -> Result<String, Error> {
        serde_json::to_string(&self.custom).map_err(|e| {
            crate::error::InvalidInputError::Other {
                message: format!("unserializable purchase payload: {}", e),
            }
            .into()
        })
    }
}
