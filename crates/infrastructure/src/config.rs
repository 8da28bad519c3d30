//! Configuration loading.
//!
//! Layers are applied in order: built-in defaults, an optional YAML file,
//! then `APICHECK_*` environment variables.

use std::path::Path;

use apicheck_application::config::parse_base_url;
use apicheck_application::{ApiConfig, ConfigError};

/// Overrides the base URL.
pub const BASE_URL_ENV: &str = "APICHECK_BASE_URL";
/// Overrides the request timeout in milliseconds.
pub const TIMEOUT_MS_ENV: &str = "APICHECK_TIMEOUT_MS";
/// Enables body logging (`true`/`false`, `1`/`0`).
pub const LOG_BODIES_ENV: &str = "APICHECK_LOG_BODIES";
/// Path of an optional YAML configuration file.
pub const CONFIG_PATH_ENV: &str = "APICHECK_CONFIG";

/// Parses a YAML document into a config.
///
/// Missing keys fall back to their defaults.
///
/// # Errors
///
/// Returns `ConfigError::Parse` for malformed YAML and
/// `ConfigError::InvalidUrl` for a base URL that is not http(s).
pub fn from_yaml_str(content: &str) -> Result<ApiConfig, ConfigError> {
    if content.trim().is_empty() {
        return Ok(ApiConfig::default());
    }
    let config: ApiConfig =
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    // serde accepts any absolute URL; the adapter needs http(s).
    parse_base_url(config.base_url.as_str())?;
    Ok(config)
}

/// Loads the config from defaults, an optional file and the process
/// environment.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if an
/// environment override is invalid.
pub fn load_config(path: Option<&Path>) -> Result<ApiConfig, ConfigError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Loads the config from defaults, an optional file and overrides read
/// through `lookup`.
///
/// # Errors
///
/// See [`load_config`].
pub fn load_config_with(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ApiConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            from_yaml_str(&content)?
        }
        None => ApiConfig::default(),
    };

    apply_overrides(config, lookup)
}

/// Loads the config using `APICHECK_CONFIG` as the optional file path.
///
/// # Errors
///
/// See [`load_config`].
pub fn load_from_env() -> Result<ApiConfig, ConfigError> {
    let path = std::env::var_os(CONFIG_PATH_ENV);
    load_config(path.as_deref().map(Path::new))
}

/// Applies `APICHECK_*` overrides read through `lookup`.
///
/// Empty values are ignored.
///
/// # Errors
///
/// Returns an error if an override cannot be parsed.
pub fn apply_overrides(
    mut config: ApiConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ApiConfig, ConfigError> {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(value) = get(BASE_URL_ENV) {
        config.base_url = parse_base_url(&value)?;
    }

    if let Some(value) = get(TIMEOUT_MS_ENV) {
        config.timeout_ms = value
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|ms| *ms > 0)
            .ok_or_else(|| invalid(TIMEOUT_MS_ENV, &value))?;
    }

    if let Some(value) = get(LOG_BODIES_ENV) {
        config.log_bodies = parse_flag(&value).ok_or_else(|| invalid(LOG_BODIES_ENV, &value))?;
    }

    tracing::debug!(
        base_url = %config.base_url,
        timeout_ms = config.timeout_ms,
        log_bodies = config.log_bodies,
        "configuration loaded"
    );
    Ok(config)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
