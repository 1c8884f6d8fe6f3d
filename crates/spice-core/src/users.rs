//! # User Directory
//!
//! Staff accounts for the admin console. Passwords arrive here already
//! hashed; this module never sees plaintext.

use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{User, UserProfile, UserRole};
use crate::validation::validate_customer_name;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn from_users(users: Vec<User>) -> Self {
        UserDirectory { users }
    }

    /// Public views of every account, in creation order.
    pub fn list(&self) -> Vec<UserProfile> {
        self.users.iter().map(UserProfile::from).collect()
    }

    /// Stored accounts, hashes included. For persistence only.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Looks up an account by login. Exact match after trimming.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        let email = email.trim();
        self.users.iter().find(|u| u.email == email)
    }

    /// Creates an account.
    ///
    /// The login is free-form (the seeded admin logs in as `admin`), but it
    /// must be non-empty and unused.
    pub fn add(
        &mut self,
        name: &str,
        email: &str,
        password_hash: String,
        role: UserRole,
    ) -> CoreResult<UserProfile> {
        validate_customer_name(name)?;

        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::Required {
                field: "email".to_string(),
            }
            .into());
        }

        if self.find_by_email(email).is_some() {
            return Err(CoreError::DuplicateUser(email.to_string()));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            email: email.to_string(),
            password_hash,
            role,
        };
        let profile = UserProfile::from(&user);
        self.users.push(user);
        Ok(profile)
    }

    pub fn delete(&mut self, id: &str) -> CoreResult<()> {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        if self.users.len() == before {
            return Err(CoreError::UserNotFound(id.to_string()));
        }
        Ok(())
    }

    pub fn into_users(self) -> Vec<User> {
        self.users
    }
}
