//! # API Error Type
//!
//! The single error type every command returns.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ValidationError ──┐                                                    │
//! │  CoreError ────────┼──► ApiError { code, message } ──► front end        │
//! │  DbError ──────────┘         │                                          │
//! │                              └── store internals are logged with        │
//! │                                  error! and replaced by a generic       │
//! │                                  message                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use spice_core::{CoreError, ValidationError};
use spice_store::DbError;

use crate::state::ConfigError;
use std::fmt;

/// What the front end receives when a command fails:
/// ```json
/// { "code": "VALIDATION_ERROR", "message": "phone has invalid format: ..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    ValidationError,
    /// A record with the same natural key already exists.
    Conflict,
    /// Login rejected.
    Unauthorized,
    CartError,
    DatabaseError,
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn unauthorized() -> Self {
        ApiError::new(ErrorCode::Unauthorized, "Invalid email or password")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound(key) => ApiError::not_found("Collection", &key),
            DbError::ConnectionFailed(e) => {
                tracing::error!("Store connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Store migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Store query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::Serialization(e) => {
                tracing::error!("Collection serialization failed: {}", e);
                ApiError::new(ErrorCode::Internal, "Could not save changes")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal store error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MenuItemNotFound(id) => ApiError::not_found("Menu item", &id),
            CoreError::OrderNotFound(id) => ApiError::not_found("Order", &id),
            CoreError::ReservationNotFound(id) => ApiError::not_found("Reservation", &id),
            CoreError::UserNotFound(id) => ApiError::not_found("User", &id),
            e @ CoreError::DuplicateUser(_) => ApiError::new(ErrorCode::Conflict, e.to_string()),
            CoreError::EmptyCart => ApiError::new(
                ErrorCode::CartError,
                "Add something to your cart before checking out",
            ),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        ApiError::internal(err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Order", "ORD009");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Order not found: ORD009");
    }

    #[test]
    fn test_core_error_mapping() {
        let dup: ApiError = CoreError::DuplicateUser("admin".to_string()).into();
        assert_eq!(dup.code, ErrorCode::Conflict);

        let empty: ApiError = CoreError::EmptyCart.into();
        assert_eq!(empty.code, ErrorCode::CartError);

        let invalid: ApiError = CoreError::Validation(ValidationError::Required {
            field: "phone".to_string(),
        })
        .into();
        assert_eq!(invalid.code, ErrorCode::ValidationError);
        assert_eq!(invalid.message, "phone is required");
    }

    #[test]
    fn test_db_error_hides_details() {
        let err: ApiError = DbError::QueryFailed("no such table: collections".to_string()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("collections"));
    }
}
