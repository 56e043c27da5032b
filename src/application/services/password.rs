//! Password Manager
//!
//! Argon2id hashing and verification, injected into the auth service as a
//! stateless collaborator. Plaintext passwords never reach the store.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::shared::error::DomainError;

/// Stateless Argon2id hash/verify service.
#[derive(Default)]
pub struct PasswordManager;

impl PasswordManager {
    pub fn new() -> Self {
        Self
    }

    /// Hash a password with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::Internal(format!("Password hashing failed: {}", e)))
    }

    /// Verify a password against its stored hash.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| DomainError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let passwords = PasswordManager::new();
        let hash = passwords.hash("secret1").unwrap();

        assert_ne!(hash, "secret1");
        assert!(passwords.verify("secret1", &hash).unwrap());
        assert!(!passwords.verify("secret2", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let passwords = PasswordManager::new();
        let h1 = passwords.hash("secret1").unwrap();
        let h2 = passwords.hash("secret1").unwrap();
        // Fresh salt per hash
        assert_ne!(h1, h2);
    }

    #[test]
    fn malformed_stored_hash_is_internal_error() {
        let passwords = PasswordManager::new();
        assert!(matches!(
            passwords.verify("secret1", "not-a-phc-string"),
            Err(DomainError::Internal(_))
        ));
    }
}
