//! # spice-core: Business Logic for Spice & Soul
//!
//! Everything the restaurant app decides lives here as plain functions and
//! in-memory collections. Nothing in this crate touches the disk.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Spice & Soul Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front end (web)                              │   │
//! │  │   Menu ──► Cart ──► Checkout        Admin: orders, menu, users  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    spice-app (state + commands)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ spice-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │   cart   │ │  coupon  │ │  order   │ │ menu/reservation │  │   │
//! │  │   │  Ledger  │ │  Table   │ │ Submitter│ │ users/dashboard  │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • INTEGER MONEY • TYPED ERRORS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    spice-store (SQLite collections)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (MenuItem, Order, Reservation, User)
//! - [`money`] - Money in paise with half-up percentage rounding
//! - [`cart`] - The cart ledger and its derived totals
//! - [`coupon`] - Coupon code table
//! - [`order`] - Order ids and submission
//! - [`menu`], [`reservation`], [`users`] - Admin-managed collections
//! - [`dashboard`] - Admin overview counts
//! - [`validation`] - Form rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use spice_core::money::Money;
//! use spice_core::GST_RATE;
//!
//! let subtotal = Money::from_major(598);
//! let tax = subtotal.calculate_tax(GST_RATE);
//!
//! assert_eq!(tax, Money::from_major_minor(29, 90));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod coupon;
pub mod dashboard;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod reservation;
pub mod types;
pub mod users;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartLedger, CartLine, CartTotals};
pub use coupon::CouponTable;
pub use dashboard::DashboardStats;
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::MenuCatalog;
pub use money::Money;
pub use order::{OrderBook, OrderSubmitter, TaggedSequence};
pub use reservation::ReservationBook;
pub use types::*;
pub use users::UserDirectory;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Goods and services tax applied to every cart (5%).
pub const GST_RATE: TaxRate = TaxRate::from_bps(500);

/// Most of one dish a single cart line can hold.
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Smallest party the booking form accepts.
pub const MIN_GUESTS: u8 = 1;

/// Largest party the booking form accepts.
pub const MAX_GUESTS: u8 = 20;

/// Hottest chilli rating a dish can carry.
pub const MAX_SPICE_LEVEL: u8 = 3;

/// Prefix for order ids (`ORD001`, `ORD002`, ...).
pub const ORDER_ID_TAG: &str = "ORD";

/// Prefix for reservation ids.
pub const RESERVATION_ID_TAG: &str = "RES";

/// Customer name recorded when checkout has no signed-in customer.
pub const DEFAULT_CUSTOMER_LABEL: &str = "Guest Customer";

/// Orders shown in the dashboard's "recent" panel.
pub const RECENT_ORDERS_LIMIT: usize = 5;
