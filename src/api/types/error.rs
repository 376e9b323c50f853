//! API error responses
//!
//! Every error leaving the HTTP boundary is a structured JSON body of the
//! form `{success: false, message, errors?, error?}`. Nothing propagates as
//! a raw fault.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// JSON body of an error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub success: bool,
    pub message: String,
    /// Itemized validation failures, present only for submission errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    /// Fault detail, present only outside production mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                success: false,
                message: message.into(),
                errors: None,
                error: None,
            },
        }
    }

    /// 400 with an itemized error list.
    pub fn validation_failed(errors: Vec<String>) -> Self {
        let mut err = Self::new(StatusCode::BAD_REQUEST, "Validation failed");
        err.body.errors = Some(errors);
        err
    }

    /// Plain 400.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 500 with the generic server-error message.
    pub fn server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    }

    /// Attach fault detail (non-production only; the caller decides).
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.body.error = Some(detail.into());
        self
    }

    /// Map a domain error to its response, optionally exposing fault detail
    /// on unexpected errors.
    pub fn from_domain(err: DomainError, expose_detail: bool) -> Self {
        match err {
            DomainError::Validation { errors } => Self::validation_failed(errors),
            DomainError::Conflict { message } => Self::bad_request(message),
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Storage { .. }
            | DomainError::Internal { .. }
            | DomainError::Configuration { .. } => {
                let server_error = Self::server_error();
                if expose_detail {
                    server_error.with_detail(err.to_string())
                } else {
                    server_error
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.body.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failed_shape() {
        let err = ApiError::validation_failed(vec!["Last Name is required".to_string()]);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let json = serde_json::to_value(&err.body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Validation failed");
        assert_eq!(json["errors"][0], "Last Name is required");
    }

    #[test]
    fn test_plain_errors_omit_list() {
        let err = ApiError::not_found("Registration not found");
        let json = serde_json::to_string(&err.body).unwrap();
        assert!(!json.contains("errors"));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_conflict_maps_to_400() {
        let err = ApiError::from_domain(DomainError::conflict("Email already registered"), false);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.message, "Email already registered");
    }

    #[test]
    fn test_storage_detail_hidden_in_production() {
        let err = ApiError::from_domain(DomainError::storage("disk full"), false);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.message, "Server error");
        assert!(err.body.error.is_none());
    }

    #[test]
    fn test_storage_detail_exposed_in_development() {
        let err = ApiError::from_domain(DomainError::storage("disk full"), true);
        assert_eq!(err.body.error.as_deref(), Some("Storage error: disk full"));
    }
}
