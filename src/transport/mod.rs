//! HTTP transport layer.
//!
//! The transport is the seam between a [`ResourceClient`](crate::ResourceClient)
//! and the network. [`HttpTransport`] captures the contract the client needs:
//! four verb methods, each returning a single deserialized value or a
//! [`TransportError`]. [`HttpClient`] is the production implementation backed
//! by reqwest.
//!
//! Implementations own all waiting, timeout, and cancellation behavior;
//! callers that drop the returned future abandon the in-flight request.

mod errors;
mod http_client;

pub use errors::TransportError;
pub use http_client::{HttpClient, HttpMethod, CLIENT_VERSION};

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Contract for performing HTTP requests on behalf of a resource client.
///
/// Each method resolves to exactly one deserialized value or one failure.
/// Per-call `headers` are merged over whatever defaults the implementation
/// carries, with the per-call value winning on conflict.
#[allow(async_fn_in_trait)]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure, non-2xx status, or
    /// response deserialization failure.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<T, TransportError>;

    /// Issues a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure, non-2xx status, or
    /// response deserialization failure.
    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<T, TransportError>;

    /// Issues a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure, non-2xx status, or
    /// response deserialization failure.
    async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<T, TransportError>;

    /// Issues a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure, non-2xx status, or
    /// response deserialization failure.
    async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<T, TransportError>;
}
