//! # Domain Types
//!
//! Core domain types used throughout Spice & Soul.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │      Order      │   │   Reservation   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (stable)    │   │  id (ORD003)    │   │  id (RES002)    │       │
//! │  │  name           │   │  customer_name  │   │  customer_name  │       │
//! │  │  price_cents    │   │  items (text)   │   │  phone, guests  │       │
//! │  │  category       │   │  total_cents    │   │  date, time     │       │
//! │  └─────────────────┘   │  status         │   │  status         │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ RestaurantSett. │   │      User       │   │  ReviewStatus   │       │
//! │  │  name, logo     │   │  email (login)  │   │  Pending        │       │
//! │  │  contact, email │   │  password_hash  │   │  Approved       │       │
//! │  └─────────────────┘   │  role           │   │  Rejected       │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persisted records use camelCase field names so the stored collections
//! read the same as the web front end's models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so GST at 5% is 500 bps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for config parsing).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        crate::GST_RATE
    }
}

// =============================================================================
// Menu
// =============================================================================

/// The fixed set of menu sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MenuCategory {
    Starters,
    #[serde(rename = "Main Course")]
    MainCourse,
    Drinks,
    Desserts,
}

impl MenuCategory {
    /// All categories in menu tab order.
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::Starters,
        MenuCategory::MainCourse,
        MenuCategory::Drinks,
        MenuCategory::Desserts,
    ];

    /// Label shown on menu tabs (and matched by admin search).
    pub const fn label(&self) -> &'static str {
        match self {
            MenuCategory::Starters => "Starters",
            MenuCategory::MainCourse => "Main Course",
            MenuCategory::Drinks => "Drinks",
            MenuCategory::Desserts => "Desserts",
        }
    }
}

impl Default for MenuCategory {
    fn default() -> Self {
        MenuCategory::MainCourse
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A dish on the menu.
///
/// Once a dish is in someone's cart the cart keeps its own snapshot of
/// name and price, so admin edits never reprice an open cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItem {
    /// Stable identifier (seed ids like `m1`, UUID v4 for admin-added dishes).
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unit price in minor units.
    pub price_cents: i64,
    pub category: MenuCategory,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_veg: bool,
    /// 0 (none) to 3 (hot).
    #[serde(default)]
    pub spice_level: u8,
}

impl MenuItem {
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Admin form payload for a new dish (everything except the id).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItemDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    pub category: MenuCategory,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_veg: bool,
    #[serde(default)]
    pub spice_level: u8,
}

impl MenuItemDraft {
    /// Attaches an id, producing a persisted menu item.
    pub fn with_id(self, id: impl Into<String>) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
            category: self.category,
            image: self.image,
            is_veg: self.is_veg,
            spice_level: self.spice_level,
        }
    }
}

// =============================================================================
// Review Status
// =============================================================================

/// Review state shared by orders and reservations.
///
/// ## Transitions
/// Any state may move to any other state; admins use this to correct
/// mistakes, so no state is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for ReviewStatus {
    fn default() -> Self {
        ReviewStatus::Pending
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::Rejected => "Rejected",
        };
        f.write_str(s)
    }
}

/// Orders use the shared review states.
pub type OrderStatus = ReviewStatus;

/// Reservations use the shared review states.
pub type ReservationStatus = ReviewStatus;

/// Status filter used by the admin order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ReviewStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: ReviewStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A submitted order.
///
/// Content is frozen at submission; only `status` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    /// Human-readable line summary, e.g. `"Butter Chicken x1, Mango Lassi x2"`.
    pub items: String,
    /// Ledger total at submission, in minor units.
    pub total_cents: i64,
    #[ts(as = "String")]
    pub date: NaiveDate,
    #[serde(default)]
    pub status: OrderStatus,
}

impl Order {
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Reservation
// =============================================================================

/// Seating preference on the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Seating {
    #[default]
    Indoor,
    Outdoor,
    Private,
}

/// A table booking as kept in the reservations collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Reservation {
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub guests: u8,
    #[serde(default)]
    pub status: ReservationStatus,
}

/// The customer booking form.
///
/// Email, occasion, requests and seating are collected by the form but
/// only the fields on [`Reservation`] are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReservationRequest {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub guests: u8,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub requests: Option<String>,
    #[serde(default)]
    pub seating: Seating,
}

// =============================================================================
// Settings
// =============================================================================

/// Restaurant profile edited on the admin settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RestaurantSettings {
    pub name: String,
    pub logo: String,
    pub contact_info: String,
    pub email: String,
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        RestaurantSettings {
            name: "Spice & Soul".to_string(),
            logo: "https://picsum.photos/seed/logo/100".to_string(),
            contact_info: "+91 98765 43210".to_string(),
            email: "contact@spiceandsoul.com".to_string(),
        }
    }
}

// =============================================================================
// Users
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum UserRole {
    Admin,
    #[default]
    Staff,
}

/// A staff account as stored (hash included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    /// Login name; the seeded admin uses the bare word `admin`.
    pub email: String,
    /// Argon2 PHC string. Never a plaintext password.
    pub password_hash: String,
    pub role: UserRole,
}

/// A staff account as shown to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        UserProfile {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_default_is_gst() {
        assert_eq!(TaxRate::default().bps(), 500);
        assert_eq!(TaxRate::from_percentage(5.0), TaxRate::from_bps(500));
    }

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&MenuCategory::MainCourse).unwrap();
        assert_eq!(json, "\"Main Course\"");
        let parsed: MenuCategory = serde_json::from_str("\"Drinks\"").unwrap();
        assert_eq!(parsed, MenuCategory::Drinks);
    }

    #[test]
    fn test_order_status_defaults_to_pending() {
        let json = r#"{"id":"ORD001","customerName":"John Doe","items":"Butter Chicken x1","totalCents":55000,"date":"2026-02-27"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, ReviewStatus::Pending);
        assert_eq!(order.total_price(), Money::from_major(550));
    }

    #[test]
    fn test_status_filter() {
        assert!(StatusFilter::All.matches(ReviewStatus::Rejected));
        assert!(StatusFilter::Only(ReviewStatus::Pending).matches(ReviewStatus::Pending));
        assert!(!StatusFilter::Only(ReviewStatus::Pending).matches(ReviewStatus::Approved));
    }

    #[test]
    fn test_user_profile_drops_hash() {
        let user = User {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin".to_string(),
            password_hash: "$argon2id$...".to_string(),
            role: UserRole::Admin,
        };
        let json = serde_json::to_string(&UserProfile::from(&user)).unwrap();
        assert!(!json.contains("argon2"));
    }
}
