//! Error types for the copydesk library.
//!
//! This module provides a unified error type with explicit variants for
//! transport, remote API, capability, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for copydesk operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout,
    /// undecodable response body).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Errors reported by the remote catalog API.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// The operation requires a valid license key and accepted terms.
    ///
    /// Raised before any request is issued; callers should point the
    /// user at their settings rather than retry.
    #[error("a valid license key and accepted terms are required")]
    LicenseRequired,

    /// Input validation errors (invalid API URL, license key, article key).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The response body was not the shape the endpoint promises.
    ///
    /// Treated the same as any other transport failure: no state is
    /// updated and the caller sees a generic connectivity message.
    #[error("malformed response: {message}")]
    Malformed { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout { duration_ms: 0 }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            TransportError::Malformed {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// An error response from the remote catalog API.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code (if present).
    pub error: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }

    /// Check if the server rejected the license key.
    ///
    /// The catalog currently answers unauthorised lookups with a 500;
    /// treat that and the proper 401/403 the same way.
    pub fn is_license_error(&self) -> bool {
        self.status == 401
            || self.status == 403
            || self.status == 500
            || self.error.as_deref() == Some("InvalidLicense")
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL format.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid license key format.
    #[error("invalid license key: {reason}")]
    LicenseKey { reason: String },

    /// Invalid article key format.
    #[error("invalid article key '{value}': {reason}")]
    ArticleKey { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
