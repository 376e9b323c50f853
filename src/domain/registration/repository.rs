//! Registration repository trait

use async_trait::async_trait;

use super::entity::{Registration, RegistrationId};
use crate::domain::DomainError;

/// Storage abstraction for the registration collection.
///
/// The repository owns the authoritative copy of persisted state; all
/// mutation is routed through it. Implementations must serialize each
/// read-modify-write cycle so that overlapping creates or deletes cannot
/// lose updates.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// All records, in insertion order.
    async fn list(&self) -> Result<Vec<Registration>, DomainError>;

    /// Look up a record by id.
    async fn get(&self, id: RegistrationId) -> Result<Option<Registration>, DomainError>;

    /// Look up a record by email. Exact, case-sensitive match.
    async fn find_by_email(&self, email: &str) -> Result<Option<Registration>, DomainError>;

    /// Append a record and persist the collection. Rejects with `Conflict`
    /// when a record with the same id or email already exists; the email
    /// check happens inside the same critical section as the append.
    async fn create(&self, registration: Registration) -> Result<Registration, DomainError>;

    /// Remove a record by id and persist the reduced collection. Returns
    /// whether a record was removed.
    async fn delete(&self, id: RegistrationId) -> Result<bool, DomainError>;
}
