//! Infrastructure layer - logging and storage implementations

pub mod logging;
pub mod registration;
