//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the checking core and external systems.

mod http_client;

pub use http_client::{ExecuteFuture, HttpClient, HttpClientError};
