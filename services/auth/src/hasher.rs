//! Password hashing and verification
//!
//! Digests are argon2id PHC strings, so the per-call random salt (16 bytes
//! from the thread CSPRNG) and the hash parameters travel inside the stored
//! string. Verification is fail-closed: a malformed digest can never crash
//! the sign-in flow, it simply does not verify.

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use thiserror::Error;
use tracing::warn;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 8;
/// Maximum accepted password length
pub const MAX_PASSWORD_LEN: usize = 128;

/// Errors produced while deriving a digest
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HashError {
    /// Password is empty or outside the accepted length bounds
    #[error("Password must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters")]
    InvalidInput,

    /// The underlying hash primitive failed
    #[error("Failed to hash password: {0}")]
    Hashing(String),
}

/// Salted password hasher
#[derive(Debug, Clone, Default)]
pub struct CredentialHasher;

impl CredentialHasher {
    /// Create a new credential hasher
    pub fn new() -> Self {
        Self
    }

    /// Derive a salted digest from a plaintext password
    ///
    /// Each call generates a fresh random salt, so hashing the same
    /// password twice yields two different digests that both verify.
    pub fn hash(&self, password: &str) -> Result<String, HashError> {
        let len = password.chars().count();
        if len < MIN_PASSWORD_LEN || len > MAX_PASSWORD_LEN {
            return Err(HashError::InvalidInput);
        }

        let salt = SaltString::generate(&mut rand::thread_rng());
        let digest = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| HashError::Hashing(e.to_string()))?
            .to_string();

        Ok(digest)
    }

    /// Verify a candidate password against a stored digest
    ///
    /// Fails closed: malformed digests and internal errors return `false`
    /// rather than propagating, so corrupted stored data cannot bypass or
    /// crash verification.
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        let parsed = match PasswordHash::new(digest) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Rejecting malformed password digest: {}", e);
                return false;
            }
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
