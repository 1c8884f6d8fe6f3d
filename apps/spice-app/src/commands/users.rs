//! # Staff Account Commands
//!
//! Account management for the admin panel and the login check. Password
//! hashes never leave this module; every response is a [`UserProfile`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::auth::{hash_password, verify_password};
use crate::error::ApiError;
use crate::state::{DataState, DbState};
use spice_core::validation::validate_password;
use spice_core::{UserProfile, UserRole};
use spice_store::CollectionKey;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
}

pub fn list_users(data: &DataState) -> Vec<UserProfile> {
    debug!("list_users command");
    data.with_data(|d| d.users.list())
}

pub async fn add_user(
    db: &DbState,
    data: &DataState,
    request: NewUserRequest,
) -> Result<UserProfile, ApiError> {
    debug!(email = %request.email, role = ?request.role, "add_user command");

    validate_password(&request.password)?;
    let password_hash = hash_password(&request.password)?;

    let profile = data
        .commit(db.inner(), CollectionKey::Users, |d| {
            d.users
                .add(&request.name, &request.email, password_hash, request.role)
                .map_err(ApiError::from)
        })
        .await?;

    info!(user_id = %profile.id, role = ?profile.role, "User added");
    Ok(profile)
}

pub async fn delete_user(db: &DbState, data: &DataState, id: String) -> Result<(), ApiError> {
    debug!(id = %id, "delete_user command");

    data.commit(db.inner(), CollectionKey::Users, |d| {
        d.users.delete(&id).map_err(ApiError::from)
    })
    .await?;

    info!(user_id = %id, "User deleted");
    Ok(())
}

/// Checks a login. Unknown email and wrong password look the same to the
/// caller.
pub fn login(data: &DataState, email: String, password: String) -> Result<UserProfile, ApiError> {
    debug!(email = %email, "login command");

    let user = data.with_data(|d| d.users.find_by_email(&email).cloned());

    match user {
        Some(user) if verify_password(&password, &user.password_hash) => {
            info!(user_id = %user.id, "Login succeeded");
            Ok(UserProfile::from(&user))
        }
        _ => {
            warn!(email = %email, "Login rejected");
            Err(ApiError::unauthorized())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD};
    use crate::error::ErrorCode;
    use crate::test_support::{admin_session, session};

    fn staff() -> NewUserRequest {
        NewUserRequest {
            name: "Priya Nair".to_string(),
            email: "priya@spiceandsoul.com".to_string(),
            password: "tandoor-42".to_string(),
            role: UserRole::Staff,
        }
    }

    #[tokio::test]
    async fn test_default_admin_can_log_in() {
        let s = admin_session().await;

        let profile = login(
            &s.data,
            DEFAULT_ADMIN_EMAIL.to_string(),
            DEFAULT_ADMIN_PASSWORD.to_string(),
        )
        .unwrap();

        assert_eq!(profile.name, "Admin User");
        assert_eq!(profile.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user() {
        let s = admin_session().await;

        let wrong = login(&s.data, "admin".to_string(), "admin".to_string()).unwrap_err();
        let unknown = login(&s.data, "nobody".to_string(), "Admin@429".to_string()).unwrap_err();

        assert_eq!(wrong.code, ErrorCode::Unauthorized);
        assert_eq!(wrong, unknown);
    }

    #[tokio::test]
    async fn test_add_login_delete() {
        let s = session().await;

        let profile = add_user(&s.db, &s.data, staff()).await.unwrap();
        assert_eq!(list_users(&s.data), vec![profile.clone()]);

        let stored = s.data.with_data(|d| d.users.users()[0].password_hash.clone());
        assert_ne!(stored, "tandoor-42");

        let logged_in = login(&s.data, profile.email.clone(), "tandoor-42".to_string()).unwrap();
        assert_eq!(logged_in.id, profile.id);

        delete_user(&s.db, &s.data, profile.id.clone()).await.unwrap();
        assert!(list_users(&s.data).is_empty());

        let err = delete_user(&s.db, &s.data, profile.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let s = session().await;
        add_user(&s.db, &s.data, staff()).await.unwrap();

        let err = add_user(&s.db, &s.data, staff()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Conflict);
        assert_eq!(list_users(&s.data).len(), 1);
    }

    #[tokio::test]
    async fn test_empty_password_rejected() {
        let s = session().await;
        let req = NewUserRequest {
            password: String::new(),
            ..staff()
        };

        let err = add_user(&s.db, &s.data, req).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
