//! In-memory registration repository implementation

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::registration::{Registration, RegistrationId, RegistrationRepository};
use crate::domain::DomainError;

/// In-memory implementation of [`RegistrationRepository`].
///
/// Keeps insertion order, which is the order the data file would hold.
/// Used by tests and available as a non-persistent backend.
#[derive(Debug, Default)]
pub struct InMemoryRegistrationRepository {
    records: RwLock<Vec<Registration>>,
}

impl InMemoryRegistrationRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with records
    pub fn with_records(records: Vec<Registration>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationRepository {
    async fn list(&self) -> Result<Vec<Registration>, DomainError> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: RegistrationId) -> Result<Option<Registration>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Registration>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.email() == email).cloned())
    }

    async fn create(&self, registration: Registration) -> Result<Registration, DomainError> {
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.id() == registration.id()) {
            return Err(DomainError::conflict(format!(
                "Registration '{}' already exists",
                registration.id()
            )));
        }

        // Checked under the write lock so overlapping creates cannot both
        // pass for the same address.
        if records.iter().any(|r| r.email() == registration.email()) {
            return Err(DomainError::conflict("Email already registered"));
        }

        records.push(registration.clone());
        Ok(registration)
    }

    async fn delete(&self, id: RegistrationId) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        Ok(records.len() < before)
    }
}
