//! Assertable response wrapper.

use std::any::type_name;

use serde::de::DeserializeOwned;

use super::condition::Condition;
use crate::error::{AssertionFailure, CheckError, CheckResult};
use crate::jwt::JwtToken;
use crate::model::Info;
use crate::response::{JsonLookup, ResponseCapture};

/// Field holding the bearer token in login responses.
pub const TOKEN_FIELD: &str = "token";

/// Wraps exactly one [`ResponseCapture`] for checking and extraction.
///
/// Checks are fail-fast: `should` consumes the wrapper and hands it back on
/// success, so a chain written with `?` stops at the first failing condition
/// and later conditions are never evaluated.
///
/// ```
/// use apicheck_domain::{AssertableResponse, ResponseCapture, has_message, has_status_code};
///
/// let response = AssertableResponse::new(ResponseCapture::from_body(
///     201,
///     r#"{"info":{"status":"success","message":"User created"}}"#,
/// ));
/// let response = response
///     .should(&has_status_code(201))?
///     .should(&has_message("User created"))?;
/// assert_eq!(response.info()?.message, "User created");
/// # Ok::<(), apicheck_domain::CheckError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AssertableResponse {
    capture: ResponseCapture,
}

impl AssertableResponse {
    /// Wraps a captured response.
    #[must_use]
    pub const fn new(capture: ResponseCapture) -> Self {
        Self { capture }
    }

    /// Evaluates `condition` against the held capture.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Assertion` with the condition name, expected and
    /// actual values and the full body when the condition does not hold.
    pub fn should(self, condition: &Condition) -> CheckResult<Self> {
        let outcome = condition.evaluate(&self.capture);
        if outcome.passed {
            return Ok(self);
        }

        let name = condition.name();
        tracing::debug!(
            condition = %name,
            expected = %outcome.expected,
            actual = %outcome.actual,
            status = self.capture.status(),
            "condition failed"
        );
        Err(AssertionFailure {
            condition: name,
            expected: outcome.expected,
            actual: outcome.actual,
            status: self.capture.status(),
            body: self.capture.body_text().into_owned(),
        }
        .into())
    }

    /// Returns the raw body bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.capture.body()
    }

    /// Returns the raw capture for manual inspection.
    #[must_use]
    pub const fn as_response(&self) -> &ResponseCapture {
        &self.capture
    }

    /// Unwraps into the raw capture.
    #[must_use]
    pub fn into_capture(self) -> ResponseCapture {
        self.capture
    }

    /// Deserializes the whole body into `T`.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Deserialization` if the body is not JSON or does
    /// not have the shape of `T`.
    pub fn as_type<T: DeserializeOwned>(&self) -> CheckResult<T> {
        self.as_type_at("$")
    }

    /// Deserializes the value at a dotted path (e.g. `info`) into `T`.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::MissingField` if the path is absent and
    /// `CheckError::Deserialization` if the value has the wrong shape.
    pub fn as_type_at<T: DeserializeOwned>(&self, path: &str) -> CheckResult<T> {
        let value = match self.capture.json_at(path) {
            JsonLookup::Found(value) => value,
            JsonLookup::Missing => return Err(self.missing_field(path)),
            JsonLookup::Invalid(reason) => return Err(self.deserialization::<T>(path, reason)),
        };
        T::deserialize(value).map_err(|e| self.deserialization::<T>(path, &e.to_string()))
    }

    /// Deserializes the `info` object.
    ///
    /// # Errors
    ///
    /// Same as [`Self::as_type_at`].
    pub fn info(&self) -> CheckResult<Info> {
        self.as_type_at("info")
    }

    /// Deserializes a JSON array body into a list of `T`.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Deserialization` if the body is not an array of
    /// `T`.
    pub fn as_list<T: DeserializeOwned>(&self) -> CheckResult<Vec<T>> {
        self.as_type()
    }

    /// Extracts the `token` field of a login response.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::MissingField` if the field is absent or is not a
    /// string, and `CheckError::Deserialization` if the body is not JSON.
    pub fn as_jwt(&self) -> CheckResult<JwtToken> {
        match self.capture.json_at(TOKEN_FIELD) {
            JsonLookup::Found(value) => value
                .as_str()
                .map(JwtToken::new)
                .ok_or_else(|| self.missing_field(TOKEN_FIELD)),
            JsonLookup::Missing => Err(self.missing_field(TOKEN_FIELD)),
            JsonLookup::Invalid(reason) => Err(self.deserialization::<JwtToken>(TOKEN_FIELD, reason)),
        }
    }

    fn missing_field(&self, field: &str) -> CheckError {
        CheckError::MissingField {
            field: field.to_string(),
            body: self.capture.body_text().into_owned(),
        }
    }

    fn deserialization<T>(&self, path: &str, reason: &str) -> CheckError {
        CheckError::Deserialization {
            target: type_name::<T>().to_string(),
            path: path.to_string(),
            reason: reason.to_string(),
            body: self.capture.body_text().into_owned(),
        }
    }
}

impl From<ResponseCapture> for AssertableResponse {
    fn from(capture: ResponseCapture) -> Self {
        Self::new(capture)
    }
}
