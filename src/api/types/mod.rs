//! Shared API types: the error format and the JSON extractor

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorBody};
pub use json::Json;
