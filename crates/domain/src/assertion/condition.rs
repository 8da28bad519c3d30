//! Conditions over captured responses.
//!
//! The set of conditions is closed: status-code equality and message-field
//! equality. Both render their mismatch the same way so failure output stays
//! uniform across a suite.

use std::fmt;

use serde_json::Value;

use crate::response::{JsonLookup, ResponseCapture};

/// JSON path of the message field in API responses.
pub const MESSAGE_PATH: &str = "info.message";

/// Actual value reported when the message field is absent.
pub const MISSING: &str = "<missing>";

/// The kinds of condition the factory can build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionKind {
    /// Response status equals `expected`.
    StatusCode {
        /// Expected status code.
        expected: u16,
    },
    /// String at `info.message` equals `expected`.
    Message {
        /// Expected message text.
        expected: String,
    },
}

/// A named, reusable predicate over a [`ResponseCapture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    kind: ConditionKind,
}

/// Outcome of evaluating a condition against one capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionOutcome {
    /// Whether the condition held.
    pub passed: bool,
    /// Actual value found, rendered for display.
    pub actual: String,
    /// Expected value, rendered for display.
    pub expected: String,
}

impl Condition {
    /// Returns the condition kind.
    #[must_use]
    pub const fn kind(&self) -> &ConditionKind {
        &self.kind
    }

    /// Returns the condition name as written at the call site.
    #[must_use]
    pub fn name(&self) -> String {
        match &self.kind {
            ConditionKind::StatusCode { expected } => format!("has_status_code({expected})"),
            ConditionKind::Message { expected } => format!("has_message({expected:?})"),
        }
    }

    /// Get a human-readable description of this condition.
    #[must_use]
    pub fn description(&self) -> String {
        match &self.kind {
            ConditionKind::StatusCode { expected } => format!("Status code = {expected}"),
            ConditionKind::Message { expected } => {
                format!("JSON {MESSAGE_PATH} equals '{expected}'")
            }
        }
    }

    /// Evaluates the condition. Never fails; a mismatch is a failed outcome.
    #[must_use]
    pub fn evaluate(&self, capture: &ResponseCapture) -> ConditionOutcome {
        match &self.kind {
            ConditionKind::StatusCode { expected } => ConditionOutcome {
                passed: capture.status() == *expected,
                actual: capture.status().to_string(),
                expected: expected.to_string(),
            },
            ConditionKind::Message { expected } => {
                let (passed, actual) = match capture.json_at(MESSAGE_PATH) {
                    JsonLookup::Found(Value::String(actual)) => {
                        (actual == expected, actual.clone())
                    }
                    JsonLookup::Found(other) => (false, other.to_string()),
                    JsonLookup::Missing => (false, MISSING.to_string()),
                    JsonLookup::Invalid(reason) => (false, format!("<invalid json: {reason}>")),
                };
                ConditionOutcome {
                    passed,
                    actual,
                    expected: expected.clone(),
                }
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Passes iff the response status equals `expected`.
#[must_use]
pub const fn has_status_code(expected: u16) -> Condition {
    Condition {
        kind: ConditionKind::StatusCode { expected },
    }
}

/// Passes iff the string at `info.message` equals `expected`.
#[must_use]
pub fn has_message(expected: impl Into<String>) -> Condition {
    Condition {
        kind: ConditionKind::Message {
            expected: expected.into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_code_pass() {
        let capture = ResponseCapture::from_body(200, "{}");
        let outcome = has_status_code(200).evaluate(&capture);
        assert!(outcome.passed);
    }

    #[test]
    fn test_status_code_mismatch() {
        let capture = ResponseCapture::from_body(404, "");
        let outcome = has_status_code(200).evaluate(&capture);
        assert_eq!(
            outcome,
            ConditionOutcome {
                passed: false,
                actual: "404".to_string(),
                expected: "200".to_string(),
            }
        );
    }

    #[test]
    fn test_message_pass() {
        let capture = ResponseCapture::from_body(201, r#"{"info":{"message":"User created"}}"#);
        assert!(has_message("User created").evaluate(&capture).passed);
    }

    #[test]
    fn test_message_mismatch() {
        let capture =
            ResponseCapture::from_body(400, r#"{"info":{"message":"Login already exist"}}"#);
        let outcome = has_message("User created").evaluate(&capture);
        assert!(!outcome.passed);
        assert_eq!(outcome.actual, "Login already exist");
        assert_eq!(outcome.expected, "User created");
    }

    #[test]
    fn test_message_missing() {
        let capture = ResponseCapture::from_body(200, r#"{"token":"abc"}"#);
        let outcome = has_message("User created").evaluate(&capture);
        assert!(!outcome.passed);
        assert_eq!(outcome.actual, MISSING);
    }

    #[test]
    fn test_message_on_invalid_json() {
        let capture = ResponseCapture::from_body(502, "Bad Gateway");
        let outcome = has_message("User created").evaluate(&capture);
        assert!(!outcome.passed);
        assert!(outcome.actual.starts_with("<invalid json"));
    }

    #[test]
    fn test_message_not_a_string() {
        let capture = ResponseCapture::from_body(200, r#"{"info":{"message":42}}"#);
        let outcome = has_message("42").evaluate(&capture);
        assert!(!outcome.passed);
        assert_eq!(outcome.actual, "42");
    }

    #[test]
    fn test_condition_names() {
        assert_eq!(has_status_code(201).name(), "has_status_code(201)");
        assert_eq!(has_message("User created").name(), r#"has_message("User created")"#);
        assert_eq!(has_status_code(201).to_string(), "Status code = 201");
    }
}
