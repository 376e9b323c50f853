//! JSON-file-backed registration repository
//!
//! Persisted state is a single pretty-printed JSON array of registration
//! records, created empty on first run and fully rewritten on every create
//! or delete. The collection is also held in memory; the file is a mirror,
//! re-read only at startup.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::registration::{Registration, RegistrationId, RegistrationRepository};
use crate::domain::DomainError;

/// File-backed implementation of [`RegistrationRepository`].
///
/// The single `RwLock` is the serialization point: every read-modify-write
/// cycle runs under the write lock, so overlapping creates or deletes cannot
/// lose each other's updates and the duplicate-email check cannot pass twice
/// for the same address.
#[derive(Debug)]
pub struct JsonFileRegistrationRepository {
    path: PathBuf,
    records: RwLock<Vec<Registration>>,
}

impl JsonFileRegistrationRepository {
    /// Open the data file, creating it as an empty array when absent.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();

        let records = if tokio::fs::try_exists(&path)
            .await
            .map_err(|e| storage_error(&path, "stat", e))?
        {
            let raw = tokio::fs::read(&path)
                .await
                .map_err(|e| storage_error(&path, "read", e))?;

            serde_json::from_slice(&raw).map_err(|e| {
                DomainError::storage(format!(
                    "Data file '{}' is not a valid registration array: {e}",
                    path.display()
                ))
            })?
        } else {
            if let Some(dir) = path.parent() {
                if !dir.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(dir)
                        .await
                        .map_err(|e| storage_error(&path, "create parent of", e))?;
                }
            }
            tokio::fs::write(&path, b"[]")
                .await
                .map_err(|e| storage_error(&path, "create", e))?;
            Vec::new()
        };

        info!(
            path = %path.display(),
            count = records.len(),
            "Registration data file loaded"
        );

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Rewrite the whole data file from the given collection.
    async fn persist(&self, records: &[Registration]) -> Result<(), DomainError> {
        let raw = serde_json::to_vec_pretty(records)
            .map_err(|e| DomainError::storage(format!("Failed to encode registrations: {e}")))?;

        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| storage_error(&self.path, "write", e))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn storage_error(path: &Path, action: &str, err: std::io::Error) -> DomainError {
    DomainError::storage(format!(
        "Failed to {action} data file '{}': {err}",
        path.display()
    ))
}

#[async_trait]
impl RegistrationRepository for JsonFileRegistrationRepository {
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
        // Write lock held across the uniqueness checks, mutation, and
        // persist: the read-modify-write cycle is atomic with respect to
        // other store operations.
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.id() == registration.id()) {
            return Err(DomainError::conflict(format!(
                "Registration '{}' already exists",
                registration.id()
            )));
        }

        // Email uniqueness must be decided under the same lock as the
        // append, or two overlapping creates could both pass the check.
        if records.iter().any(|r| r.email() == registration.email()) {
            return Err(DomainError::conflict("Email already registered"));
        }

        records.push(registration.clone());

        if let Err(e) = self.persist(&records).await {
            records.pop();
            return Err(e);
        }

        Ok(registration)
    }

    async fn delete(&self, id: RegistrationId) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;

        let Some(index) = records.iter().position(|r| r.id() == id) else {
            return Ok(false);
        };

        let removed = records.remove(index);

        if let Err(e) = self.persist(&records).await {
            records.insert(index, removed);
            return Err(e);
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registration::{Gender, NewRegistration};

    fn sample(email: &str) -> Registration {
        Registration::create(NewRegistration {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: email.to_string(),
            phone: "+11234567890".to_string(),
            age: Some(28),
            gender: Gender::Male,
            address: Some("12 Main St".to_string()),
            country: "USA".to_string(),
            state: "California".to_string(),
            city: "Los Angeles".to_string(),
            password_hash: "$argon2id$stub".to_string(),
        })
    }

    #[tokio::test]
    async fn test_open_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registrations.json");

        let repo = JsonFileRegistrationRepository::open(&path).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(raw, "[]");
    }

    #[tokio::test]
    async fn test_create_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registrations.json");

        let created = {
            let repo = JsonFileRegistrationRepository::open(&path).await.unwrap();
            repo.create(sample("a@example.com")).await.unwrap()
        };

        // A fresh instance reads the file back.
        let repo = JsonFileRegistrationRepository::open(&path).await.unwrap();
        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id(), created.id());
        assert_eq!(all[0].email(), "a@example.com");
    }

    #[tokio::test]
    async fn test_delete_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registrations.json");

        let repo = JsonFileRegistrationRepository::open(&path).await.unwrap();
        let first = repo.create(sample("a@example.com")).await.unwrap();
        repo.create(sample("b@example.com")).await.unwrap();

        assert!(repo.delete(first.id()).await.unwrap());

        let reopened = JsonFileRegistrationRepository::open(&path).await.unwrap();
        let all = reopened.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].email(), "b@example.com");
    }

    #[tokio::test]
    async fn test_delete_missing_id_returns_false() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registrations.json");

        let repo = JsonFileRegistrationRepository::open(&path).await.unwrap();
        assert!(!repo.delete(RegistrationId::new()).await.unwrap());
    }

    #[tokio::test]
    async fn test_open_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registrations.json");
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let result = JsonFileRegistrationRepository::open(&path).await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_creates_same_email_commit_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registrations.json");

        let repo = std::sync::Arc::new(
            JsonFileRegistrationRepository::open(&path).await.unwrap(),
        );

        let mut handles = Vec::new();
        for _ in 0..4 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create(sample("dup@example.com")).await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        let reopened = JsonFileRegistrationRepository::open(&path).await.unwrap();
        assert_eq!(reopened.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_serialized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registrations.json");

        let repo = std::sync::Arc::new(
            JsonFileRegistrationRepository::open(&path).await.unwrap(),
        );

        let mut handles = Vec::new();
        for i in 0..8 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create(sample(&format!("user{i}@example.com"))).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        // No lost updates: every record survives in memory and on disk.
        assert_eq!(repo.list().await.unwrap().len(), 8);
        let reopened = JsonFileRegistrationRepository::open(&path).await.unwrap();
        assert_eq!(reopened.list().await.unwrap().len(), 8);
    }
}
