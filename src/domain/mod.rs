//! Domain layer - pure registration logic
//!
//! Holds the validation engine, the form state model, the static location
//! table, and the registration entity. Nothing in here performs I/O.

pub mod error;
pub mod form;
pub mod location;
pub mod registration;
pub mod validation;

pub use error::DomainError;
pub use form::{Field, RegistrationForm};
pub use registration::{Gender, NewRegistration, Registration, RegistrationId, RegistrationRepository};
pub use validation::{FieldValidation, PasswordStrength};
