//! Registration store infrastructure: repositories, password hashing, and
//! the registration service.

pub mod json_file;
pub mod password;
pub mod repository;
pub mod service;

pub use json_file::JsonFileRegistrationRepository;
pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::InMemoryRegistrationRepository;
pub use service::{RegisterRequest, RegistrationService};
