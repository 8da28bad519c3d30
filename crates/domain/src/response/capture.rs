//! Response capture type
//!
//! Contains the immutable snapshot of one HTTP response that every check
//! and extraction reads from.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;
use std::time::Duration;

use serde_json::Value;

use super::json_path;

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns the canonical reason phrase for the statuses the API uses.
    #[must_use]
    pub const fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            201 => "Created",
            204 => "No Content",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// Result of reading a JSON path from a capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonLookup<'a> {
    /// The path resolved to a value.
    Found(&'a Value),
    /// The body is JSON but the path is absent.
    Missing,
    /// The body is not valid JSON.
    Invalid(&'a str),
}

/// Immutable snapshot of one HTTP response.
///
/// The parsed JSON view is computed on first use and cached; the body
/// itself is never modified after construction.
#[derive(Debug, Clone)]
pub struct ResponseCapture {
    status: u16,
    headers: HashMap<String, String>,
    body: Vec<u8>,
    duration: Duration,
    json: OnceLock<Result<Value, String>>,
}

impl ResponseCapture {
    /// Creates a capture from raw response data.
    #[must_use]
    pub fn new(
        status: impl Into<StatusCode>,
        headers: HashMap<String, String>,
        body: Vec<u8>,
        duration: Duration,
    ) -> Self {
        Self {
            status: status.into().as_u16(),
            headers,
            body,
            duration,
            json: OnceLock::new(),
        }
    }

    /// Creates a capture with only a status and body.
    #[must_use]
    pub fn from_body(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status, HashMap::new(), body.into(), Duration::ZERO)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the status as a `StatusCode` struct.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        StatusCode::new(self.status)
    }

    /// Returns all response headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the `Content-Type` header, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns the raw body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the body as lossy UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Returns the body size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.body.len()
    }

    /// Returns how long the request took.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the parsed JSON view of the body.
    ///
    /// # Errors
    ///
    /// Returns the parser message if the body is not valid JSON.
    pub fn json(&self) -> Result<&Value, &str> {
        self.json
            .get_or_init(|| serde_json::from_slice(&self.body).map_err(|e| e.to_string()))
            .as_ref()
            .map_err(String::as_str)
    }

    /// Reads a dotted JSON path such as `info.message`.
    #[must_use]
    pub fn json_at(&self, path: &str) -> JsonLookup<'_> {
        match self.json() {
            Ok(json) => json_path::lookup(json, path).map_or(JsonLookup::Missing, JsonLookup::Found),
            Err(reason) => JsonLookup::Invalid(reason),
        }
    }
}
