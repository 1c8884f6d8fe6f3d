//! # Commands
//!
//! One function per front-end action.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (exports)
//! ├── cart.rs         ◄─── Cart manipulation and coupons
//! ├── order.rs        ◄─── Checkout and order review
//! ├── menu.rs         ◄─── Menu browsing and editing
//! ├── reservation.rs  ◄─── Table booking and review
//! ├── settings.rs     ◄─── Restaurant profile
//! ├── users.rs        ◄─── Staff accounts and login
//! ├── dashboard.rs    ◄─── Admin overview counts
//! └── config.rs       ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  front end                                                              │
//! │     │  update_order_status(db, data, "ORD001", Approved)                │
//! │     ▼                                                                   │
//! │  command                                                                │
//! │     │  1. debug! with the arguments                                     │
//! │     │  2. mutate the collection under the state lock                    │
//! │     │  3. persist the touched collection (lock released)                │
//! │     │  4. info! for anything that changed                               │
//! │     ▼                                                                   │
//! │  Result<T, ApiError>  ──► serialized for the front end                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Reads the menu, writes the cart
//! fn add_to_cart(data: &DataState, cart: &CartState, item_id: String)
//!
//! // Writes an order and persists it
//! async fn place_order(db: &DbState, cart: &CartState, data: &DataState, ..)
//! ```

pub mod cart;
pub mod config;
pub mod dashboard;
pub mod menu;
pub mod order;
pub mod reservation;
pub mod settings;
pub mod users;
