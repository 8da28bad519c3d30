//! Service wrappers for the fixed API endpoints.

pub mod file_service;
pub mod user_service;

pub use file_service::FileService;
pub use user_service::UserService;
