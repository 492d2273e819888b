//! Typed errors for the Web of Trust client.
//!
//! Parsing, predicate and transport failures each get their own type so a
//! caller that only interprets responses never has to match on HTTP errors.

use thiserror::Error;

use crate::models::Axis;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, WotError>;

/// Errors surfaced by [`WebOfTrustClient`](crate::WebOfTrustClient).
#[derive(Debug, Error)]
pub enum WotError {
    /// Configuration error (missing API key, invalid settings)
    #[error("config error: {0}")]
    Config(String),

    /// Base URL could not be parsed or joined
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request failed before a response arrived, or the body could not be read.
    ///
    /// The request URL is stripped since it carries the API key.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Non-2xx response from the lookup API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response arrived but could not be interpreted
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl From<reqwest::Error> for WotError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

/// Structural problems in a lookup response.
///
/// Any of these aborts the whole parse; a partial result would silently drop
/// a host the caller asked about.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Body was not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level value was neither an object nor an array of results
    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    /// A result record carried no `target`, so no URL can be assigned
    #[error("result {key:?} has no target")]
    MissingTarget { key: String },

    /// A result record had a field of the wrong shape
    #[error("result {key:?} is malformed: {reason}")]
    MalformedRecord { key: String, reason: String },
}

/// A predicate was asked about an axis the service never reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{url} has no {axis} measurement")]
pub struct MissingMeasurement {
    pub url: String,
    pub axis: Axis,
}

/// Integer code outside the published category list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown category code: {0}")]
pub struct UnknownCategory(pub u32);
