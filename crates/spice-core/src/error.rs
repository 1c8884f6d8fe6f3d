//! # Error Types
//!
//! Domain and validation errors for Spice & Soul.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Error Types                                      │
//! │                                                                         │
//! │  spice-core (this crate)                                               │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Form input rejected before reaching the core   │
//! │                                                                         │
//! │  spice-store                                                           │
//! │  └── DbError          - Collection store failures                      │
//! │                                                                         │
//! │  spice-app                                                             │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front end              │
//! │        DbError ─────────────────────► ApiError                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Cart operations on an id that is not in the cart are silent no-ops, and
//! an unknown coupon code is reported as `false`. Neither surfaces here.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// An admin action targeted a menu item that no longer exists.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    /// A staff account with this login already exists.
    #[error("A user with email '{0}' already exists")]
    DuplicateUser(String),

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Forms are rejected as a whole before any collection is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (phone digits, email shape, date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "phone".to_string(),
        };
        assert_eq!(err.to_string(), "phone is required");

        let err = ValidationError::OutOfRange {
            field: "guests".to_string(),
            min: 1,
            max: 20,
        };
        assert_eq!(err.to_string(), "guests must be between 1 and 20");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_duplicate_user_message() {
        let err = CoreError::DuplicateUser("admin".to_string());
        assert_eq!(err.to_string(), "A user with email 'admin' already exists");
    }
}
