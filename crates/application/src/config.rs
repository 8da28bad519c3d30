//! Run configuration.
//!
//! One `ApiConfig` is built per run and handed by reference to the HTTP
//! adapter; nothing reads configuration from global state.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Default base URL of the user API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Errors raised while building an [`ApiConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL cannot be parsed or cannot carry paths.
    #[error("invalid base URL '{value}': {reason}")]
    InvalidUrl {
        /// The rejected value.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// A setting has a value of the wrong type.
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue {
        /// Setting name.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// The configuration file could not be read.
    #[error("cannot read {path}: {reason}")]
    Read {
        /// File path.
        path: String,
        /// I/O error message.
        reason: String,
    },

    /// The configuration file is malformed.
    #[error("cannot parse configuration: {0}")]
    Parse(String),
}

/// Settings shared by every HTTP call in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL that endpoint paths are resolved against.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout_ms: u64,
    /// Log request and response bodies at debug level.
    pub log_bodies: bool,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ApiConfig {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            log_bodies: false,
            user_agent: concat!("apicheck/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiConfig {
    /// Creates a config for the given base URL with default settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Sets the timeout (builder pattern).
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Enables body logging (builder pattern).
    #[must_use]
    pub const fn with_log_bodies(mut self, log_bodies: bool) -> Self {
        self.log_bodies = log_bodies;
        self
    }

    /// Resolves an endpoint path such as `/api/signup` against the base URL.
    ///
    /// A path prefix on the base URL is kept: with base `http://h/v1` the
    /// endpoint `/api/users` resolves to `http://h/v1/api/users`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the joined URL is invalid.
    pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path.trim_start_matches('/'))
            .map_err(|e| ConfigError::InvalidUrl {
                value: format!("{base}{path}"),
                reason: e.to_string(),
            })
    }
}

/// Parses and validates a base URL.
///
/// # Errors
///
/// Returns `ConfigError::InvalidUrl` if the value is not an absolute
/// http(s) URL.
pub fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        value: value.to_string(),
        reason,
    };
    let url = Url::parse(value.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    Ok(url)
}
