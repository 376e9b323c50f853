//! Registration API
//!
//! A user-registration service with:
//! - Pure, per-field validation rules shared by the form model and the server
//! - A cascading country/state/city dropdown resolver over a static table
//! - A password-strength meter
//! - A JSON-file-backed registration store with duplicate-email rejection

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::AppState;
use infrastructure::registration::{
    Argon2Hasher, JsonFileRegistrationRepository, RegistrationService,
};

/// Create the application state from configuration: open the data file and
/// wire the registration service.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let repository = JsonFileRegistrationRepository::open(&config.storage.data_file).await?;
    let service = RegistrationService::new(Arc::new(repository), Arc::new(Argon2Hasher::new()));

    Ok(AppState::new(
        Arc::new(service),
        config.server.environment.expose_error_detail(),
    ))
}
