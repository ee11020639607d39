//! Configuration types for the HTTP transport.
//!
//! The main types in this module are:
//!
//! - [`TransportConfig`]: settings for the reqwest-backed transport
//! - [`TransportConfigBuilder`]: a builder for constructing [`TransportConfig`]
//! - [`BaseUrl`]: a validated base URL newtype
//!
//! # Example
//!
//! ```rust
//! use restkit::{BaseUrl, TransportConfig};
//!
//! let config = TransportConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/v1").unwrap())
//!     .user_agent_prefix("my-app/2.0")
//!     .header("x-api-key", "secret")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.example.com/v1");
//! ```

mod newtypes;

pub use newtypes::BaseUrl;

use std::collections::HashMap;

use crate::error::ConfigError;

/// Configuration for the reqwest-backed HTTP transport.
///
/// Holds the base URL every request path is joined against, an optional
/// `User-Agent` prefix, and extra headers attached to every request.
///
/// `TransportConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct TransportConfig {
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    default_headers: HashMap<String, String>,
}

impl TransportConfig {
    /// Creates a new builder for constructing a `TransportConfig`.
    #[must_use]
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the `User-Agent` prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the extra headers attached to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}

/// Builder for constructing [`TransportConfig`] instances.
#[derive(Debug, Default)]
pub struct TransportConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    default_headers: HashMap<String, String>,
}

impl TransportConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets a prefix prepended to the generated `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Builds the [`TransportConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] if no base URL was set.
    pub fn build(self) -> Result<TransportConfig, ConfigError> {
        let base_url = self.base_url.ok_or(ConfigError::MissingBaseUrl)?;
        Ok(TransportConfig {
            base_url,
            user_agent_prefix: self.user_agent_prefix,
            default_headers: self.default_headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_base_url() {
        let result = TransportConfig::builder().build();
        assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
    }

    #[test]
    fn test_builder_with_base_url_only() {
        let config = TransportConfig::builder()
            .base_url(BaseUrl::new("https://api.example.com").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://api.example.com");
        assert!(config.user_agent_prefix().is_none());
        assert!(config.default_headers().is_empty());
    }

    #[test]
    fn test_builder_collects_headers() {
        let config = TransportConfig::builder()
            .base_url(BaseUrl::new("https://api.example.com").unwrap())
            .header("x-api-key", "secret")
            .header("x-tenant", "acme")
            .build()
            .unwrap();

        assert_eq!(config.default_headers().len(), 2);
        assert_eq!(
            config.default_headers().get("x-api-key"),
            Some(&"secret".to_string())
        );
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TransportConfig>();
    }
}
