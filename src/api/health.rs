//! Health check endpoint

use axum::{http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::types::Json;

/// Health response body
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// GET /api/health - returns 200 while the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: "Server is running",
        timestamp: Utc::now(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "Server is running",
            timestamp: Utc::now(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "Server is running");
        assert!(json.get("timestamp").is_some());
    }
}
