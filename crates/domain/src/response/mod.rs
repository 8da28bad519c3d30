//! Captured HTTP responses

mod capture;
pub mod json_path;

pub use capture::{JsonLookup, ResponseCapture, StatusCode};
