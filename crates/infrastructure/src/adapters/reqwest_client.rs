//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port. It resolves endpoint
//! paths against the configured base URL, logs every exchange through
//! `tracing` and captures the full body before returning.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use apicheck_application::{ApiConfig, ExecuteFuture, HttpClient, HttpClientError};
use apicheck_domain::{ApiRequest, HttpMethod, RequestBody, ResponseCapture};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use uuid::Uuid;

/// HTTP client implementation using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    config: ApiConfig,
}

impl ReqwestHttpClient {
    /// Creates a client for the given run configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(config: &ApiConfig) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self::with_client(client, config))
    }

    /// Creates a client around a custom reqwest client.
    #[must_use]
    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Attaches the request body.
    fn build_body(
        builder: RequestBuilder,
        body: &RequestBody,
    ) -> Result<RequestBuilder, HttpClientError> {
        match body {
            RequestBody::None => Ok(builder),
            RequestBody::Json(value) => Ok(builder.json(value)),
            RequestBody::Multipart {
                field,
                file_name,
                content_type,
                bytes,
            } => {
                let part = Part::bytes(bytes.clone())
                    .file_name(file_name.clone())
                    .mime_str(content_type)
                    .map_err(|e| HttpClientError::InvalidBody(e.to_string()))?;
                Ok(builder.multipart(Form::new().part(field.clone(), part)))
            }
        }
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }
        if error.is_connect() {
            return HttpClientError::ConnectionFailed(error.to_string());
        }
        if error.is_builder() {
            return HttpClientError::InvalidUrl(error.to_string());
        }
        HttpClientError::Other(error.to_string())
    }

    fn log_request_body(&self, request_id: Uuid, body: &RequestBody) {
        if !self.config.log_bodies {
            return;
        }
        match body {
            RequestBody::None => {}
            RequestBody::Json(value) => {
                tracing::debug!(%request_id, body = %value, "request body");
            }
            RequestBody::Multipart {
                field,
                file_name,
                bytes,
                ..
            } => {
                tracing::debug!(
                    %request_id,
                    field = field.as_str(),
                    file_name = file_name.as_str(),
                    size = bytes.len(),
                    "multipart body"
                );
            }
        }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: &ApiRequest) -> ExecuteFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let url = self
                .config
                .endpoint(&request.path)
                .map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?;
            let request_id = Uuid::now_v7();
            let timeout_ms = self.config.timeout_ms;

            tracing::info!(%request_id, method = %request.method, %url, "sending request");
            self.log_request_body(request_id, &request.body);

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(request.method), url);
            if let Some(token) = &request.bearer {
                builder = builder.bearer_auth(token);
            }
            builder = Self::build_body(builder, &request.body)?;

            let start = Instant::now();
            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();
            let headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();
            let body = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::Other(format!("Failed to read body: {e}")))?
                .to_vec();
            let duration = start.elapsed();

            tracing::info!(
                %request_id,
                status,
                elapsed_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
                size = body.len(),
                "received response"
            );
            let capture = ResponseCapture::new(status, headers, body, duration);
            if self.config.log_bodies {
                tracing::debug!(%request_id, body = %capture.body_text(), "response body");
            }
            Ok(capture)
        })
    }
}
