//! apicheck Domain - Core checking types
//!
//! This crate defines response captures, the condition DSL, the
//! assertable response wrapper and the API models.
//! All types here are pure Rust with no I/O dependencies.

pub mod assertion;
pub mod error;
pub mod jwt;
pub mod model;
pub mod request;
pub mod response;

pub use assertion::{
    AssertableResponse, Condition, ConditionKind, ConditionOutcome, has_message, has_status_code,
};
pub use error::{AssertionFailure, CheckError, CheckResult};
pub use jwt::JwtToken;
pub use model::{FullUser, Game, Info, JwtAuthData, PasswordChange};
pub use request::{ApiRequest, HttpMethod, RequestBody};
pub use response::{JsonLookup, ResponseCapture, StatusCode};
