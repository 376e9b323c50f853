use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::registrations;
use super::state::AppState;
use super::types::ApiError;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/register", post(registrations::register))
        .route("/api/registrations", get(registrations::list_registrations))
        .route(
            "/api/registrations/{id}",
            get(registrations::get_registration).delete(registrations::delete_registration),
        )
        .fallback(route_not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Unmatched routes answer in the same JSON error shape.
async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
