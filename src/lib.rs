//! # restkit
//!
//! A small, typed REST resource client. One [`ResourceClient`] is bound to a
//! single base resource path and a shared HTTP transport, and maps the usual
//! CRUD verbs onto computed URLs:
//!
//! - `get` / `list` issue HTTP GET
//! - `create` issues HTTP POST
//! - `update` issues HTTP PUT
//! - `delete` issues HTTP DELETE
//!
//! Mutating calls carry a fresh `x-requestid` header (a random v4 UUID) for
//! server-side tracing and idempotency. The client itself holds no mutable
//! state, performs no retries or caching, and surfaces transport failures
//! unchanged.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`ResourceClient`], generic over the key, filter, command, and response
//!   shapes of one REST collection
//! - The [`HttpTransport`] trait, the seam between the client and the
//!   network layer
//! - [`HttpClient`], a reqwest-backed transport implementation configured
//!   via [`TransportConfig`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use restkit::{BaseUrl, HttpClient, ResourceClient, TransportConfig};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Order {
//!     id: u64,
//!     total: String,
//! }
//!
//! let config = TransportConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/v1")?)
//!     .build()?;
//! let transport = Arc::new(HttpClient::new(config));
//!
//! let orders: ResourceClient<HttpClient, u64, (), Order, Vec<Order>> =
//!     ResourceClient::new("orders", transport);
//!
//! let order = orders.get(&42, None).await?;
//! let draft = orders.get(&42, Some("draft")).await?; // GET /v1/orders/draft/42
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: configuration newtypes validate on construction
//! - **Thread-safe**: clients are `Send + Sync` and cheap to clone
//! - **Async-first**: every operation returns a future immediately; waiting
//!   happens only inside the transport

pub mod config;
pub mod error;
pub mod resource;
pub mod transport;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, TransportConfig, TransportConfigBuilder};
pub use error::ConfigError;
pub use resource::{resolve_path, ResourceClient, CORRELATION_ID_HEADER};
pub use transport::{HttpClient, HttpMethod, HttpTransport, TransportError};
