//! # Staff Credentials
//!
//! Argon2id password hashing. Only PHC hash strings are ever stored.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::error::ApiError;

/// Name of the account created on first start.
pub const DEFAULT_ADMIN_NAME: &str = "Admin User";

/// Login of the account created on first start.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin";

/// Initial password of the account created on first start.
pub const DEFAULT_ADMIN_PASSWORD: &str = "Admin@429";

/// Hashes a password for storage with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            ApiError::internal("Failed to hash password")
        })?;

    Ok(hash.to_string())
}

/// `true` if `password` matches `hash`. A malformed hash never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password(DEFAULT_ADMIN_PASSWORD).unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains(DEFAULT_ADMIN_PASSWORD));
        assert!(verify_password(DEFAULT_ADMIN_PASSWORD, &hash));
        assert!(!verify_password("admin@429", &hash));
    }

    #[test]
    fn test_same_password_different_salt() {
        let a = hash_password("tandoor").unwrap();
        let b = hash_password("tandoor").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        assert!(!verify_password("Admin@429", "Admin@429"));
        assert!(!verify_password("", ""));
    }
}
