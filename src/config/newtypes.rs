//! Validated newtypes for transport configuration.

use std::fmt;

use crate::error::ConfigError;

/// A validated base URL for the HTTP transport.
///
/// The URL must be non-empty and carry an `http://` or `https://` scheme.
/// Trailing slashes are trimmed on construction so that path joining always
/// inserts exactly one `/` between the base and a resource path.
///
/// # Example
///
/// ```rust
/// use restkit::BaseUrl;
///
/// let url = BaseUrl::new("https://api.example.com/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.com/v1");
///
/// assert!(BaseUrl::new("api.example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated `BaseUrl`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] for an empty value and
    /// [`ConfigError::InvalidBaseUrl`] when the scheme is missing or not
    /// http(s).
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl { url });
        }
        Ok(Self(url.trim_end_matches('/').to_string()))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
