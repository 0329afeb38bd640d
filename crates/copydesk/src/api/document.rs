//! Catalog document type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::ArticleKey;

/// A document returned by a listing endpoint.
///
/// Beyond its `key`, a document is an opaque field map. The field set
/// varies by listing (search results carry `summary`, `word_count` and
/// `price`; library entries carry a purchase `date`), so everything but
/// the key stays schema-agnostic and interpretation is left to the
/// renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The unique key of this document. Its only identity.
    pub key: ArticleKey,

    /// Remaining fields, as returned by the server.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Document {
    /// Look up a raw field value.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Look up a field as a string slice.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// The document title, or an empty string if the server omitted it.
    pub fn title(&self) -> &str {
        self.field_str("title").unwrap_or_default()
    }

    /// The search-result summary, if present.
    pub fn summary(&self) -> Option<&str> {
        self.field_str("summary")
    }

    /// The word count, if present. Accepts either a number or a
    /// numeric string.
    pub fn word_count(&self) -> Option<u64> {
        match self.fields.get("word_count")? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// The listed price as a display string, if present.
    pub fn price(&self) -> Option<String> {
        match self.fields.get("price")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The purchase date of a library entry, if present.
    ///
    /// The server wraps these as `datetime(<timestamp> UTC)`; the
    /// wrapper is stripped, leaving the bare timestamp text.
    pub fn purchased_date(&self) -> Option<String> {
        let text = self.fields.get("date")?.get("text")?.as_str()?;
        let stripped = text
            .strip_prefix("datetime(")
            .and_then(|t| t.strip_suffix(" UTC)"))
            .unwrap_or(text);
        Some(stripped.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn deserializes_search_result_fields() {
        let doc = doc(json!({
            "key": "10020251",
            "title": "Care of Ferns",
            "summary": "A primer on indoor ferns.",
            "word_count": 450,
            "price": "24.00"
        }));

        assert_eq!(doc.key.as_str(), "10020251");
        assert_eq!(doc.title(), "Care of Ferns");
        assert_eq!(doc.summary(), Some("A primer on indoor ferns."));
        assert_eq!(doc.word_count(), Some(450));
        assert_eq!(doc.price(), Some("24.00".to_string()));
    }

    #[test]
    fn word_count_accepts_numeric_string() {
        let doc = doc(json!({ "key": "1", "word_count": "980" }));
        assert_eq!(doc.word_count(), Some(980));
    }

    #[test]
    fn strips_datetime_wrapper_from_purchase_date() {
        let doc = doc(json!({
            "key": "1",
            "date": { "text": "datetime(2013-05-14 09:21:03 UTC)" }
        }));
        assert_eq!(
            doc.purchased_date(),
            Some("2013-05-14 09:21:03".to_string())
        );
    }

    #[test]
    fn unwrapped_date_passes_through() {
        let doc = doc(json!({
            "key": "1",
            "date": { "text": "2013-05-14" }
        }));
        assert_eq!(doc.purchased_date(), Some("2013-05-14".to_string()));
    }

    #[test]
    fn missing_fields_are_none() {
        let doc = doc(json!({ "key": "1" }));
        assert_eq!(doc.title(), "");
        assert_eq!(doc.summary(), None);
        assert_eq!(doc.word_count(), None);
        assert_eq!(doc.price(), None);
        assert_eq!(doc.purchased_date(), None);
    }
}
