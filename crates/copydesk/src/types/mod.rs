//! Validated value types used across the library.

mod api_base_url;
mod article_key;
mod license_key;

pub use api_base_url::ApiBaseUrl;
pub use article_key::ArticleKey;
pub use license_key::LicenseKey;
