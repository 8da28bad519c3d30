//! Check error types

use thiserror::Error;

/// A declared condition did not hold for a captured response.
///
/// Carries the full captured body so the failure can be diagnosed without
/// re-running the request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "condition '{condition}' failed: expected {expected}, got {actual} (status {status})\nbody: {body}"
)]
pub struct AssertionFailure {
    /// Name of the condition that failed.
    pub condition: String,
    /// Expected value, rendered for display.
    pub expected: String,
    /// Actual value found in the response.
    pub actual: String,
    /// Status code of the captured response.
    pub status: u16,
    /// Captured body as lossy UTF-8.
    pub body: String,
}

/// Errors raised while checking a response or setting up fixtures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// A condition passed to `should` did not hold.
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    /// The body (or a part of it) does not have the requested shape.
    #[error("cannot deserialize {target} at '{path}': {reason}\nbody: {body}")]
    Deserialization {
        /// Name of the requested type.
        target: String,
        /// JSON path that was read (`$` for the whole body).
        path: String,
        /// Parser error message.
        reason: String,
        /// Captured body as lossy UTF-8.
        body: String,
    },

    /// A field required by an extraction accessor is absent.
    #[error("field '{field}' missing from response\nbody: {body}")]
    MissingField {
        /// Name of the missing field.
        field: String,
        /// Captured body as lossy UTF-8.
        body: String,
    },

    /// A test declared a fixture the registry cannot supply.
    #[error("unsupported fixture '{name}' at position {position}: {reason}")]
    UnsupportedFixture {
        /// Fixture name from the marker.
        name: String,
        /// Position of the marker in the test's manifest.
        position: usize,
        /// Why the fixture cannot be supplied.
        reason: String,
    },

    /// A resolved value was requested under a name the manifest never declared.
    #[error("fixture '{name}' was not declared in the test's manifest")]
    UndeclaredFixture {
        /// Requested fixture name.
        name: String,
    },
}

impl CheckError {
    /// Returns the assertion failure if this error is one.
    #[must_use]
    pub const fn as_assertion(&self) -> Option<&AssertionFailure> {
        match self {
            Self::Assertion(failure) => Some(failure),
            _ => None,
        }
    }

    /// Creates an unsupported fixture error.
    pub fn unsupported_fixture(
        name: impl Into<String>,
        position: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::UnsupportedFixture {
            name: name.into(),
            position,
            reason: reason.into(),
        }
    }
}

/// Result type alias for checks.
pub type CheckResult<T> = Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_failure_message_is_self_contained() {
        let failure = AssertionFailure {
            condition: "status code".to_string(),
            expected: "200".to_string(),
            actual: "404".to_string(),
            status: 404,
            body: r#"{"info":{"message":"not found"}}"#.to_string(),
        };
        let message = CheckError::from(failure).to_string();

        assert!(message.contains("status code"));
        assert!(message.contains("expected 200"));
        assert!(message.contains("got 404"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_unsupported_fixture_message() {
        let error = CheckError::unsupported_fixture("ghost", 2, "no fixture registered");
        assert_eq!(
            error.to_string(),
            "unsupported fixture 'ghost' at position 2: no fixture registered"
        );
        assert!(error.as_assertion().is_none());
    }
}
