//! # Validation Module
//!
//! Form validation for the booking, menu and staff forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end                                                    │
//! │  └── Inline messages while typing                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command (Rust)                                               │
//! │  └── THIS MODULE: the whole form is rejected on the first bad field    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Collections (spice-core books)                               │
//! │  └── Only ever see validated input                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::types::{MenuItemDraft, ReservationRequest};
use crate::{MAX_GUESTS, MAX_SPICE_LEVEL, MIN_GUESTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a phone number: exactly ten ASCII digits.
///
/// ```rust
/// use spice_core::validation::validate_phone;
///
/// assert!(validate_phone("9876543210").is_ok());
/// assert!(validate_phone("987654321").is_err());
/// assert!(validate_phone("98765 43210").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if phone.len() != 10 || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "enter a valid 10-digit number".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address shape: `local@domain.tld`, no whitespace.
///
/// ```rust
/// use spice_core::validation::validate_email;
///
/// assert!(validate_email("guest@example.com").is_ok());
/// assert!(validate_email("guest@example").is_err());
/// assert!(validate_email("not an email").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "invalid email address".to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    // Domain needs a dot with something on both sides of the last one.
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// Validates a person's name (at least two characters after trimming).
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() < 2 {
        return Err(ValidationError::TooShort {
            field: "name".to_string(),
            min: 2,
        });
    }

    Ok(())
}

/// Validates a party size.
pub fn validate_guests(guests: u8) -> ValidationResult<()> {
    if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
        return Err(ValidationError::OutOfRange {
            field: "guests".to_string(),
            min: i64::from(MIN_GUESTS),
            max: i64::from(MAX_GUESTS),
        });
    }

    Ok(())
}

/// Validates a booking date (`YYYY-MM-DD`).
pub fn validate_date(date: &str) -> ValidationResult<()> {
    if date.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "date".to_string(),
        });
    }

    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: "please select a date".to_string(),
        }
    })?;

    Ok(())
}

/// Validates a booking time (`HH:MM`, 24-hour).
pub fn validate_time(time: &str) -> ValidationResult<()> {
    if time.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "time".to_string(),
        });
    }

    NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|_| {
        ValidationError::InvalidFormat {
            field: "time".to_string(),
            reason: "please select a time".to_string(),
        }
    })?;

    Ok(())
}

/// Validates a dish name.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a price in minor units. Zero is allowed (complimentary items).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

pub fn validate_spice_level(level: u8) -> ValidationResult<()> {
    if level > MAX_SPICE_LEVEL {
        return Err(ValidationError::OutOfRange {
            field: "spice level".to_string(),
            min: 0,
            max: i64::from(MAX_SPICE_LEVEL),
        });
    }

    Ok(())
}

/// Validates a discount percentage for a coupon table entry.
pub fn validate_discount_percent(percent: u8) -> ValidationResult<()> {
    if percent > 100 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the customer booking form, field by field in form order.
pub fn validate_reservation_request(req: &ReservationRequest) -> ValidationResult<()> {
    validate_customer_name(&req.full_name)?;
    validate_phone(&req.phone)?;
    validate_email(&req.email)?;
    validate_date(&req.date)?;
    validate_time(&req.time)?;
    validate_guests(req.guests)?;
    Ok(())
}

/// Validates the admin menu item form.
pub fn validate_menu_item(draft: &MenuItemDraft) -> ValidationResult<()> {
    validate_item_name(&draft.name)?;
    validate_price_cents(draft.price_cents)?;
    validate_spice_level(draft.spice_level)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MenuCategory, Seating};

    fn booking() -> ReservationRequest {
        ReservationRequest {
            full_name: "Alice Brown".to_string(),
            phone: "9876543210".to_string(),
            email: "alice@example.com".to_string(),
            date: "2026-02-28".to_string(),
            time: "19:00".to_string(),
            guests: 4,
            occasion: None,
            requests: None,
            seating: Seating::Indoor,
        }
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("").is_err());
        assert!(validate_phone("987654321").is_err());
        assert!(validate_phone("98765432100").is_err());
        assert!(validate_phone("98765abcde").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("contact@spiceandsoul.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("a@.com").is_err());
        assert!(validate_email("a@example.").is_err());
    }

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Al").is_ok());
        assert!(validate_customer_name(" A ").is_err());
        assert!(validate_customer_name("").is_err());
    }

    #[test]
    fn test_validate_guests() {
        assert!(validate_guests(1).is_ok());
        assert!(validate_guests(20).is_ok());
        assert!(validate_guests(0).is_err());
        assert!(validate_guests(21).is_err());
    }

    #[test]
    fn test_validate_date_and_time() {
        assert!(validate_date("2026-02-28").is_ok());
        assert!(validate_date("").is_err());
        assert!(validate_date("28/02/2026").is_err());
        assert!(validate_time("19:00").is_ok());
        assert!(validate_time("7pm").is_err());
    }

    #[test]
    fn test_reservation_form_rejects_short_phone() {
        let mut req = booking();
        assert!(validate_reservation_request(&req).is_ok());

        req.phone = "987654321".to_string();
        let err = validate_reservation_request(&req).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "phone"));
    }

    #[test]
    fn test_reservation_form_rejects_bad_email() {
        let mut req = booking();
        req.email = "alice.example.com".to_string();
        let err = validate_reservation_request(&req).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "email"));
    }

    #[test]
    fn test_validate_menu_item() {
        let mut draft = MenuItemDraft {
            name: "Gulab Jamun".to_string(),
            price_cents: 12_900,
            category: MenuCategory::Desserts,
            ..MenuItemDraft::default()
        };
        assert!(validate_menu_item(&draft).is_ok());

        draft.price_cents = -1;
        assert!(validate_menu_item(&draft).is_err());

        draft.price_cents = 0;
        draft.spice_level = 4;
        assert!(validate_menu_item(&draft).is_err());
    }

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(0).is_ok());
        assert!(validate_discount_percent(100).is_ok());
        assert!(validate_discount_percent(101).is_err());
    }
}
