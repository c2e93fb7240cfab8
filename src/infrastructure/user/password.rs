//! One-way password hashing with Argon2

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2,
};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Hash-and-verify capability for stored credentials.
///
/// `verify` only confirms a match; the original password is never recovered.
pub trait PasswordHasher: Send + Sync + Debug {
    /// Produce a salted hash in PHC string format
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a candidate password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Argon2id hasher with default parameters and a fresh random salt per hash
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        // A stored value that is not a PHC string can never match
        PasswordHash::new(hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}
