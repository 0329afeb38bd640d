//! Article key type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The unique key of a catalog article.
///
/// Article keys are opaque server-assigned identifiers. They are the
/// only identity a record carries; the catalog does not deduplicate
/// beyond them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleKey(String);

impl ArticleKey {
    /// Create a new article key, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();

        if s.is_empty() {
            return Err(InvalidInputError::ArticleKey {
                value: s,
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        Ok(Self(s))
    }

    /// Returns the key as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ArticleKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ArticleKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
