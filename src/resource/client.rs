//! The generic REST resource client.

use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::resource::{flatten_query, resolve_path};
use crate::transport::{HttpTransport, TransportError};

/// Header carrying the per-call correlation id on mutating requests.
///
/// The value is a fresh random v4 UUID, generated per call and never reused,
/// for server-side tracing and idempotency.
pub const CORRELATION_ID_HEADER: &str = "x-requestid";

/// A typed client for one REST-style resource collection.
///
/// Binds an immutable base resource path to a shared transport and maps CRUD
/// verbs onto computed URLs:
///
/// | Method | HTTP | URL |
/// |---|---|---|
/// | [`get`](Self::get) | GET | `resource_uri[/path][/id]` |
/// | [`list`](Self::list) | GET | `resource_uri[/path]` + query params |
/// | [`create`](Self::create) | POST | `resource_uri[/path]` |
/// | [`update`](Self::update) | PUT | `resource_uri[/path][/id]` |
/// | [`delete`](Self::delete) | DELETE | `resource_uri[/path][/id]` |
///
/// The type parameters name the shapes of one concrete resource: the key
/// `K`, the list filter `S`, and per-operation request/response bodies. All
/// of them default to permissive shapes (`String` keys, [`Value`]
/// everywhere else), so one generic implementation serves many resource
/// types without duplicated request plumbing.
///
/// The client holds no per-request state; concurrent calls on one instance
/// are independent, and cloning shares the underlying transport.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use restkit::{HttpClient, ResourceClient};
/// use serde_json::Value;
///
/// // String keys, untyped shapes
/// let pets: ResourceClient<HttpClient> = ResourceClient::new("pets", transport);
///
/// let pet = pets.get(&"7".to_string(), None).await?;
/// let created = pets.create(&serde_json::json!({"name": "Rex"}), None).await?;
/// ```
pub struct ResourceClient<
    T,
    K = String,
    S = Value,
    GetRes = Value,
    ListRes = Value,
    CreateCmd = Value,
    UpdateCmd = Value,
    CreateRes = Value,
    UpdateRes = Value,
    DeleteRes = Value,
> {
    resource_uri: String,
    transport: Arc<T>,
    marker: PhantomData<
        fn() -> (
            K,
            S,
            GetRes,
            ListRes,
            CreateCmd,
            UpdateCmd,
            CreateRes,
            UpdateRes,
            DeleteRes,
        ),
    >,
}

impl<T, K, S, GetRes, ListRes, CreateCmd, UpdateCmd, CreateRes, UpdateRes, DeleteRes>
    ResourceClient<T, K, S, GetRes, ListRes, CreateCmd, UpdateCmd, CreateRes, UpdateRes, DeleteRes>
where
    T: HttpTransport,
    K: Display,
    S: Serialize,
    GetRes: DeserializeOwned,
    ListRes: DeserializeOwned,
    CreateCmd: Serialize,
    UpdateCmd: Serialize,
    CreateRes: DeserializeOwned,
    UpdateRes: DeserializeOwned,
    DeleteRes: DeserializeOwned,
{
    /// Creates a client bound to one resource path and one shared transport.
    ///
    /// Typically constructed once at wiring time and kept for the lifetime
    /// of the binding.
    #[must_use]
    pub fn new(resource_uri: impl Into<String>, transport: Arc<T>) -> Self {
        Self {
            resource_uri: resource_uri.into(),
            transport,
            marker: PhantomData,
        }
    }

    /// Returns the base resource path this client is bound to.
    #[must_use]
    pub fn resource_uri(&self) -> &str {
        &self.resource_uri
    }

    /// Fetches a single resource by key.
    ///
    /// Issues `GET resource_uri[/path][/id]` with no body.
    ///
    /// # Errors
    ///
    /// Forwards any [`TransportError`] unchanged.
    pub async fn get(&self, id: &K, path: Option<&str>) -> Result<GetRes, TransportError> {
        let url = self.resolve(path, Some(id));
        self.transport.get(&url, None, None).await
    }

    /// Lists resources, optionally filtered.
    ///
    /// Issues `GET resource_uri[/path]` with the filter's top-level fields
    /// flattened into query parameters. No filter means no query parameters.
    ///
    /// # Errors
    ///
    /// Forwards any [`TransportError`] unchanged.
    pub async fn list(
        &self,
        search: Option<&S>,
        path: Option<&str>,
    ) -> Result<ListRes, TransportError> {
        let url = self.resolve(path, None);
        let query = search
            .map(flatten_query)
            .transpose()?
            .filter(|q| !q.is_empty());
        self.transport.get(&url, query.as_ref(), None).await
    }

    /// Creates a new resource.
    ///
    /// Issues `POST resource_uri[/path]` with the command as the JSON body
    /// and a fresh [`CORRELATION_ID_HEADER`].
    ///
    /// # Errors
    ///
    /// Forwards any [`TransportError`] unchanged.
    pub async fn create(
        &self,
        command: &CreateCmd,
        path: Option<&str>,
    ) -> Result<CreateRes, TransportError> {
        let url = self.resolve(path, None);
        let body = serde_json::to_value(command)?;
        self.transport
            .post(&url, body, Some(&correlation_headers()))
            .await
    }

    /// Updates an existing resource.
    ///
    /// Issues `PUT resource_uri[/path][/id]` with the command as the JSON
    /// body and a fresh [`CORRELATION_ID_HEADER`].
    ///
    /// # Errors
    ///
    /// Forwards any [`TransportError`] unchanged.
    pub async fn update(
        &self,
        id: &K,
        command: &UpdateCmd,
        path: Option<&str>,
    ) -> Result<UpdateRes, TransportError> {
        let url = self.resolve(path, Some(id));
        let body = serde_json::to_value(command)?;
        self.transport
            .put(&url, body, Some(&correlation_headers()))
            .await
    }

    /// Deletes a resource by key.
    ///
    /// Issues `DELETE resource_uri[/path][/id]` with a fresh
    /// [`CORRELATION_ID_HEADER`].
    ///
    /// # Errors
    ///
    /// Forwards any [`TransportError`] unchanged.
    pub async fn delete(&self, id: &K, path: Option<&str>) -> Result<DeleteRes, TransportError> {
        let url = self.resolve(path, Some(id));
        self.transport
            .delete(&url, Some(&correlation_headers()))
            .await
    }

    fn resolve(&self, path: Option<&str>, id: Option<&K>) -> String {
        let key = id.map(ToString::to_string);
        resolve_path(&self.resource_uri, path, key.as_deref())
    }
}

/// Builds the header set for a mutating call: one fresh correlation id.
fn correlation_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert(
        CORRELATION_ID_HEADER.to_string(),
        Uuid::new_v4().to_string(),
    );
    headers
}

impl<T, K, S, GetRes, ListRes, CreateCmd, UpdateCmd, CreateRes, UpdateRes, DeleteRes> Clone
    for ResourceClient<T, K, S, GetRes, ListRes, CreateCmd, UpdateCmd, CreateRes, UpdateRes, DeleteRes>
{
    fn clone(&self) -> Self {
        Self {
            resource_uri: self.resource_uri.clone(),
            transport: Arc::clone(&self.transport),
            marker: PhantomData,
        }
    }
}

impl<T, K, S, GetRes, ListRes, CreateCmd, UpdateCmd, CreateRes, UpdateRes, DeleteRes> fmt::Debug
    for ResourceClient<T, K, S, GetRes, ListRes, CreateCmd, UpdateCmd, CreateRes, UpdateRes, DeleteRes>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("resource_uri", &self.resource_uri)
            .finish_non_exhaustive()
    }
}
