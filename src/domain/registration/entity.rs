//! Registration record entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique registration identifier.
///
/// UUID v4, assigned at creation time. Replaces the timestamp-valued ids of
/// earlier revisions, which could collide under rapid successive creations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationId(Uuid);

impl RegistrationId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }
}

impl Default for RegistrationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender options offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Resolve a submitted label against the enumerated options. Anything
    /// unrecognized counts as no selection.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == label)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A committed registration. Immutable after creation, except for deletion.
///
/// The full record, password hash included, is what the store persists; read
/// paths expose only response types that omit the hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    id: RegistrationId,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    age: Option<u32>,
    gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    address: Option<String>,
    country: String,
    state: String,
    city: String,
    /// Argon2 hash of the submitted password. The cleartext is never stored.
    password_hash: String,
    registered_at: DateTime<Utc>,
}

/// Field values accepted from a validated submission.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: Option<u32>,
    pub gender: Gender,
    pub address: Option<String>,
    pub country: String,
    pub state: String,
    pub city: String,
    pub password_hash: String,
}

impl Registration {
    /// Create a record from a validated submission, assigning identity and
    /// the registration timestamp.
    pub fn create(fields: NewRegistration) -> Self {
        Self {
            id: RegistrationId::new(),
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone: fields.phone,
            age: fields.age,
            gender: fields.gender,
            address: fields.address,
            country: fields.country,
            state: fields.state,
            city: fields.city,
            password_hash: fields.password_hash,
            registered_at: Utc::now(),
        }
    }

    pub fn id(&self) -> RegistrationId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}
