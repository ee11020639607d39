//! Reqwest-backed implementation of [`HttpTransport`].

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::TransportConfig;
use crate::transport::{HttpTransport, TransportError};

/// Client version from Cargo.toml, reported in the `User-Agent` header.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP methods used by the transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Reqwest-backed HTTP transport.
///
/// The client handles:
/// - URL construction from the configured base URL and a request path
/// - Default headers, including `User-Agent` and `Accept`
/// - JSON body serialization and response deserialization
/// - Mapping non-2xx statuses to [`TransportError::Response`]
///
/// It does not retry, cache, or transform responses; callers that need a
/// timeout or retry policy layer it here, never in the resource client.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use restkit::{BaseUrl, HttpClient, HttpTransport, TransportConfig};
///
/// let config = TransportConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com/v1")?)
///     .build()?;
/// let client = HttpClient::new(config);
///
/// let order: serde_json::Value = client.get("orders/42", None, None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL every request path is joined against.
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP transport from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: TransportConfig) -> Self {
        // Build User-Agent header
        let prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("{prefix}restkit v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        for (key, value) in config.default_headers() {
            default_headers.insert(key.clone(), value.clone());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Joins the base URL and a request path with exactly one `/`.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&HashMap<String, String>>,
        body: Option<Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<T, TransportError> {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);

        let mut builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        // Merge per-call headers over the defaults; per-call wins.
        let mut merged = self.default_headers.clone();
        if let Some(extra) = headers {
            for (key, value) in extra {
                merged.insert(key.clone(), value.clone());
            }
        }
        for (key, value) in &merged {
            builder = builder.header(key, value);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let res = builder.send().await?;
        let code = res.status().as_u16();
        let success = res.status().is_success();
        let text = res.text().await.unwrap_or_default();

        if !success {
            return Err(TransportError::Response {
                code,
                message: text,
            });
        }

        // An empty body parses as JSON null, which satisfies Value,
        // Option<T>, and ().
        let value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };
        Ok(serde_json::from_value(value)?)
    }
}

impl HttpTransport for HttpClient {
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<T, TransportError> {
        self.send(HttpMethod::Get, path, query, None, headers).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<T, TransportError> {
        self.send(HttpMethod::Post, path, None, Some(body), headers)
            .await
    }

    async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<T, TransportError> {
        self.send(HttpMethod::Put, path, None, Some(body), headers)
            .await
    }

    async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<T, TransportError> {
        self.send(HttpMethod::Delete, path, None, None, headers)
            .await
    }
}
