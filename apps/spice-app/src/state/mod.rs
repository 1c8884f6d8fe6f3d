//! # State Module
//!
//! Session state, split by concern so each command asks only for what it
//! touches.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌────────────┐ ┌──────────────┐ ┌──────────────────┐ ┌─────────────┐  │
//! │  │  DbState   │ │  CartState   │ │    DataState     │ │ ConfigState │  │
//! │  │            │ │              │ │                  │ │             │  │
//! │  │ • store    │ │ • ledger     │ │ • menu, orders   │ │ • currency  │  │
//! │  │   handle   │ │ • coupons    │ │ • reservations   │ │ • tax rate  │  │
//! │  │            │ │              │ │ • settings,users │ │ • db path   │  │
//! │  └────────────┘ └──────────────┘ └──────────────────┘ └─────────────┘  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod data;
mod db;

pub use cart::CartState;
pub use config::{ConfigError, ConfigState};
pub use data::{Collections, DataState};
pub use db::DbState;
