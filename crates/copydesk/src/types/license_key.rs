//! License key type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A catalog license key.
///
/// The key is an opaque secret issued per purchaser; it rides along on
/// library lookups, preview links, purchases and imports.
///
/// # Security
///
/// The key is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use copydesk::LicenseKey;
///
/// let key = LicenseKey::new("abcd-1234-efgh").unwrap();
/// assert_eq!(key.as_str(), "abcd-1234-efgh");
/// assert_eq!(format!("{:?}", key), "LicenseKey(<redacted>)");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicenseKey(String);

impl LicenseKey {
    /// Create a new license key, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or contains whitespace.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();

        if s.is_empty() {
            return Err(InvalidInputError::LicenseKey {
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidInputError::LicenseKey {
                reason: "must not contain whitespace".to_string(),
            }
            .into());
        }

        Ok(Self(s))
    }

    /// Returns the key as a string.
    ///
    /// # Security
    ///
    /// Use this only when constructing requests. Never log or display
    /// this value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Intentionally hide the key in Debug output
impl fmt::Debug for LicenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LicenseKey(<redacted>)")
    }
}

impl FromStr for LicenseKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_key() {
        let key = LicenseKey::new("abcd-1234").unwrap();
        assert_eq!(key.as_str(), "abcd-1234");
    }

    #[test]
    fn rejects_empty() {
        assert!(LicenseKey::new("").is_err());
    }

    #[test]
    fn rejects_whitespace() {
        assert!(LicenseKey::new("abcd 1234").is_err());
    }

    #[test]
    fn debug_is_redacted() {
        let key = LicenseKey::new("super-secret").unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains("super-secret"));
    }
}
