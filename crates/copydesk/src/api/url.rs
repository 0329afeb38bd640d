//! Request URL construction.
//!
//! The catalog API takes its arguments as a single `json=` query
//! parameter holding a serialized JSON object, appended to the base URL
//! plus endpoint path.

use serde::Serialize;
use url::Url;

use crate::error::{Error, InvalidInputError};
use crate::types::ApiBaseUrl;

/// Build a request URL for an endpoint and an argument object.
///
/// Arguments serialize in struct-field order, so the resulting URL is
/// deterministic for a given argument type. Only standard URL
/// percent-encoding is applied to the serialized object.
///
/// # Example
///
/// ```
/// use copydesk::ApiBaseUrl;
/// use copydesk::api::build_query_url;
/// use serde::Serialize;
///
/// #[derive(Serialize, Debug)]
/// struct Args<'a> {
///     query_terms: &'a str,
///     offset: u32,
/// }
///
/// let base = ApiBaseUrl::new("https://api.example.com").unwrap();
/// let url = build_query_url(&base, "find/article/by_text", &Args {
///     query_terms: "gardening",
///     offset: 0,
/// }).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://api.example.com/find/article/by_text?json=%7B%22query_terms%22%3A%22gardening%22%2C%22offset%22%3A0%7D"
/// );
/// ```
pub fn build_query_url<Q>(base: &ApiBaseUrl, endpoint: &str, args: &Q) -> Result<Url, Error>
where
    Q: Serialize,
{
    let json = serde_json::to_string(args).map_err(|e| InvalidInputError::Other {
        message: format!("unserializable query arguments: {}", e),
    })?;

    let mut url =
        Url::parse(&base.endpoint_url(endpoint)).map_err(|e| InvalidInputError::Other {
            message: format!("invalid endpoint path '{}': {}", endpoint, e),
        })?;

    url.query_pairs_mut().append_pair("json", &json);

    Ok(url)
}
