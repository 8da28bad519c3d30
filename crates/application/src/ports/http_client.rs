//! HTTP Client port

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use apicheck_domain::{ApiRequest, ResponseCapture};
use thiserror::Error;

/// Boxed future returned by [`HttpClient::execute`].
pub type ExecuteFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ResponseCapture, HttpClientError>> + Send + 'a>>;

/// Transport-level failures. These are not retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete in time.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Configured timeout.
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request body could not be encoded.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Any other client failure.
    #[error("{0}")]
    Other(String),
}

/// Port for executing API requests.
///
/// Implementations resolve `request.path` against their configured base URL
/// and capture the whole response body before returning.
pub trait HttpClient: Send + Sync {
    /// Executes a request and captures the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails due to network issues,
    /// timeout, or other HTTP-related problems. Non-2xx statuses are not
    /// errors.
    fn execute(&self, request: &ApiRequest) -> ExecuteFuture<'_>;
}

impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    fn execute(&self, request: &ApiRequest) -> ExecuteFuture<'_> {
        (**self).execute(request)
    }
}
