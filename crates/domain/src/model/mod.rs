//! API models

mod auth;
mod user;

pub use auth::{JwtAuthData, PasswordChange};
pub use user::{FullUser, Game};

use serde::{Deserialize, Serialize};

/// The `info` object carried by most API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    /// Outcome marker, e.g. `success` or `fail`.
    #[serde(default)]
    pub status: Option<String>,
    /// Human-readable message.
    pub message: String,
}
