//! Registration entity, identifiers, and the repository trait

pub mod entity;
pub mod repository;

pub use entity::{Gender, NewRegistration, Registration, RegistrationId};
pub use repository::RegistrationRepository;
