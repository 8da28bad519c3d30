//! apicheck Infrastructure - Adapters and implementations
//!
//! This crate provides the reqwest implementation of the `HttpClient`
//! port, configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod logging;

pub use adapters::ReqwestHttpClient;
pub use config::{apply_overrides, from_yaml_str, load_config, load_config_with, load_from_env};
pub use logging::{init_logging, init_test_logging};
