//! Response assertions.
//!
//! Conditions are built with [`has_status_code`] and [`has_message`] and
//! applied through [`AssertableResponse::should`].

mod assertable;
mod condition;

pub use assertable::{AssertableResponse, TOKEN_FIELD};
pub use condition::{
    Condition, ConditionKind, ConditionOutcome, MESSAGE_PATH, MISSING, has_message,
    has_status_code,
};
