//! Error types for airtable-fetch
//!
//! Every stage of the pipeline (configuration, HTTP, encoding, disk) reports
//! failures through the single [`Error`] enum so the binary can map them to an
//! exit status in one place.

use thiserror::Error;

/// Result type alias for airtable-fetch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for airtable-fetch
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The environment variable that caused the error (e.g., "AIRTABLE_API_KEY")
        key: Option<String>,
    },

    /// The API answered with a non-success status
    #[error("Airtable API error: {status} {reason}\n{body}")]
    Api {
        /// Numeric HTTP status code
        status: u16,
        /// Canonical reason phrase for the status (may be empty)
        reason: String,
        /// Raw response body as returned by the API
        body: String,
    },

    /// Transport failure, timeout, or undecodable response body
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request URL could not be constructed
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Build a [`Error::Config`] for a specific environment variable
    pub fn config(message: impl Into<String>, key: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }

    /// HTTP status code carried by this error, if it came from the API
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::InvalidUrl(e.to_string())
    }
}
