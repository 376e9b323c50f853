//! Application state shared across handlers

use std::sync::Arc;

use crate::infrastructure::registration::RegistrationService;

/// State handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub registrations: Arc<RegistrationService>,
    /// Whether 500 responses may carry fault detail (non-production only).
    pub expose_error_detail: bool,
}

impl AppState {
    pub fn new(registrations: Arc<RegistrationService>, expose_error_detail: bool) -> Self {
        Self {
            registrations,
            expose_error_detail,
        }
    }
}
