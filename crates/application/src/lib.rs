//! apicheck Application - Fixtures, services and ports
//!
//! This crate defines the application layer with:
//! - The HTTP port and run configuration
//! - Fixture registration and resolution
//! - Random test data
//! - Service wrappers over the user and file endpoints

pub mod config;
pub mod error;
pub mod fixture;
pub mod ports;
pub mod services;
pub mod test_data;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApplicationError, ApplicationResult};
pub use fixture::{
    FixtureLifetime, FixtureManifest, FixtureMarker, FixtureRegistry, ResolvedFixtures,
    default_registry,
};
pub use ports::{ExecuteFuture, HttpClient, HttpClientError};
pub use services::{FileService, UserService};
pub use test_data::TestDataGenerator;
