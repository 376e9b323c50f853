//! Application configuration loading

mod app_config;

pub use app_config::{
    AppConfig, DatabaseConfig, EmailConfig, Environment, LogFormat, LoggingConfig, ServerConfig,
    StorageConfig,
};
