//! Registration service - server-side validation and store operations

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::registration::{
    Gender, NewRegistration, Registration, RegistrationId, RegistrationRepository,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// A submission as received from the client, before server-side validation.
///
/// Every field is optional so that missing values surface as itemized
/// validation errors rather than deserialization failures.
#[derive(Debug, Clone, Default)]
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<u32>,
    /// Raw gender label; resolved against [`Gender`] during validation so an
    /// unrecognized value yields an itemized error, not a body rejection.
    pub gender: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub terms: Option<bool>,
}

/// Service in front of the registration store.
///
/// Re-checks every submission independently of the client: client-side
/// validation is never trusted.
#[derive(Clone)]
pub struct RegistrationService {
    repository: Arc<dyn RegistrationRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegistrationService {
    pub fn new(
        repository: Arc<dyn RegistrationRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self { repository, hasher }
    }

    /// Validate and commit a submission.
    ///
    /// Rejects with `Validation` when required fields are missing, passwords
    /// do not match, or terms are unaccepted; with `Conflict` when the email
    /// is already registered. On success the password is hashed, identity and
    /// timestamp are assigned, and the record is appended to the store.
    pub async fn register(&self, request: RegisterRequest) -> Result<Registration, DomainError> {
        let errors = validate_submission(&request);
        if !errors.is_empty() {
            debug!(count = errors.len(), "Submission failed server-side validation");
            return Err(DomainError::validation(errors));
        }

        // Presence was just checked, so the fallbacks below cannot fire.
        let email = request.email.unwrap_or_default();
        let password = request.password.unwrap_or_default();
        let gender = request
            .gender
            .as_deref()
            .and_then(Gender::from_label)
            .unwrap_or(Gender::Other);

        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(DomainError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash(&password)?;

        let registration = Registration::create(NewRegistration {
            first_name: request.first_name.unwrap_or_default(),
            last_name: request.last_name.unwrap_or_default(),
            email,
            phone: request.phone.unwrap_or_default(),
            age: request.age,
            gender,
            address: request.address.filter(|a| !a.trim().is_empty()),
            country: request.country.unwrap_or_default(),
            state: request.state.unwrap_or_default(),
            city: request.city.unwrap_or_default(),
            password_hash,
        });

        let registration = self.repository.create(registration).await?;

        info!(
            id = %registration.id(),
            email = %registration.email(),
            "Registration created"
        );

        Ok(registration)
    }

    pub async fn list(&self) -> Result<Vec<Registration>, DomainError> {
        self.repository.list().await
    }

    pub async fn get(&self, id: RegistrationId) -> Result<Option<Registration>, DomainError> {
        self.repository.get(id).await
    }

    pub async fn delete(&self, id: RegistrationId) -> Result<bool, DomainError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            info!(id = %id, "Registration deleted");
        }
        Ok(deleted)
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

/// Required-field presence checks, in form order, with the cross-field
/// password rule and the terms gate at the end.
fn validate_submission(request: &RegisterRequest) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(&request.first_name) {
        errors.push("First Name is required".to_string());
    }
    if is_blank(&request.last_name) {
        errors.push("Last Name is required".to_string());
    }
    if is_blank(&request.email) {
        errors.push("Email is required".to_string());
    }
    if is_blank(&request.phone) {
        errors.push("Phone Number is required".to_string());
    }
    if request
        .gender
        .as_deref()
        .and_then(Gender::from_label)
        .is_none()
    {
        errors.push("Gender is required".to_string());
    }
    if is_blank(&request.country) {
        errors.push("Country is required".to_string());
    }
    if is_blank(&request.state) {
        errors.push("State is required".to_string());
    }
    if is_blank(&request.city) {
        errors.push("City is required".to_string());
    }
    if is_blank(&request.password) {
        errors.push("Password is required".to_string());
    }
    if is_blank(&request.confirm_password) {
        errors.push("Confirm Password is required".to_string());
    }
    if request.password.as_deref().unwrap_or_default()
        != request.confirm_password.as_deref().unwrap_or_default()
    {
        errors.push("Passwords do not match".to_string());
    }
    if !request.terms.unwrap_or(false) {
        errors.push("Terms & Conditions must be accepted".to_string());
    }

    errors
}
