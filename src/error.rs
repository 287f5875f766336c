//! Error types for itemfeed
//!
//! Two error domains exist, matching the two fallible stages of the
//! pipeline: retrieving bytes from the network and decoding them into items.
//! Both are terminal for the `load` invocation that produced them — there is
//! no retry and no partial result, and a failed load never disturbs data the
//! caller obtained from an earlier successful load.

use thiserror::Error;

/// Result type alias for itemfeed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for itemfeed
#[derive(Debug, Error)]
pub enum Error {
    /// Network retrieval failed
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// Response body could not be decoded into items
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Errors raised while fetching the payload
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Transport-level failure (connection refused, timeout, TLS, etc.)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    #[error("unexpected HTTP status {status}")]
    HttpStatus {
        /// Status code returned by the server
        status: u16,
    },

    /// A response arrived but carried no body
    #[error("response had an empty body")]
    EmptyBody,

    /// The configured endpoint is not a valid absolute URL
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Errors raised while decoding the payload
///
/// A single malformed element fails the whole batch; there is no partial
/// decode. The only tolerated anomaly is a missing or `null` `name`, which
/// is repaired to `""` during decoding rather than reported here.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Body is not valid JSON, not an array, or an element is missing a
    /// required field (`id` or `listId`) or carries one with the wrong type
    #[error("invalid payload: {0}")]
    Json(#[from] serde_json::Error),
}
