//! JWT handling for tokens returned by `/api/login`.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

use crate::error::{CheckError, CheckResult};

/// A bearer token extracted from a login response.
///
/// The token is not verified; claims are decoded only for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JwtToken(String);

impl JwtToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the value for an `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Decodes the payload segment into JSON claims.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Deserialization` if the token does not have three
    /// segments or the payload is not base64url-encoded JSON.
    pub fn claims(&self) -> CheckResult<Value> {
        let malformed = |reason: String| CheckError::Deserialization {
            target: "jwt claims".to_string(),
            path: "token".to_string(),
            reason,
            body: self.0.clone(),
        };

        let segments: Vec<&str> = self.0.split('.').collect();
        let [_, payload, _] = segments.as_slice() else {
            return Err(malformed(format!("expected 3 segments, found {}", segments.len())));
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| malformed(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| malformed(e.to_string()))
    }

    /// Returns the `sub` claim, if present.
    #[must_use]
    pub fn subject(&self) -> Option<String> {
        self.claims()
            .ok()?
            .get("sub")
            .and_then(Value::as_str)
            .map(ToString::to_string)
    }
}

impl fmt::Display for JwtToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for JwtToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
