//! Typed resource clients for REST collections.
//!
//! A [`ResourceClient`] binds one base resource path to one shared
//! [`HttpTransport`](crate::HttpTransport) and exposes `get`, `list`,
//! `create`, `update`, and `delete` over it. Path resolution and query
//! flattening live in their own submodules.

mod client;
mod path;
mod query;

pub use client::{ResourceClient, CORRELATION_ID_HEADER};
pub use path::resolve_path;

pub(crate) use query::flatten_query;
