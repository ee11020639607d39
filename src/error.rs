//! Configuration error types.

use thiserror::Error;

/// Errors raised while constructing configuration values.
///
/// All configuration types validate on construction, so these errors
/// surface before any request is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL was empty.
    #[error("Base URL cannot be empty.")]
    EmptyBaseUrl,

    /// The base URL did not carry an http or https scheme.
    #[error("Base URL must start with http:// or https://, got: {url}")]
    InvalidBaseUrl {
        /// The value that failed validation.
        url: String,
    },

    /// The transport configuration builder was finished without a base URL.
    #[error("Transport configuration requires a base URL.")]
    MissingBaseUrl,
}
