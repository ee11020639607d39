//! Transport error types.
//!
//! There is a single failure taxonomy for operations: [`TransportError`].
//! Resource clients forward it to callers unchanged, with no retry, wrapping,
//! or classification of their own.

use thiserror::Error;

/// A failure raised by the HTTP transport.
///
/// Covers the three ways a request can fail: the connection itself, a
/// non-success status from the server, and JSON (de)serialization of the
/// body on either side.
///
/// # Example
///
/// ```rust,ignore
/// match orders.get(&42, None).await {
///     Ok(order) => println!("{order:?}"),
///     Err(TransportError::Response { code, message }) => {
///         println!("server said {code}: {message}");
///     }
///     Err(TransportError::Network(e)) => println!("network error: {e}"),
///     Err(TransportError::Serialization(e)) => println!("bad payload: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("Request failed with status {code}: {message}")]
    Response {
        /// The HTTP status code of the response.
        code: u16,
        /// The raw response body, if any.
        message: String,
    },

    /// A request body or response body could not be (de)serialized as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TransportError {
    /// Returns the HTTP status code for response failures.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response { code, .. } => Some(*code),
            Self::Network(_) | Self::Serialization(_) => None,
        }
    }
}
