//! # spice-store: Durable Collection Store for Spice & Soul
//!
//! Keeps each admin collection (menu, orders, reservations, settings,
//! users) as one JSON document in a local SQLite file, so everything
//! survives a restart.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Spice & Soul Data Flow                             │
//! │                                                                         │
//! │  Command (update_order_status)                                          │
//! │       │  mutate in memory (spice-core)                                  │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   spice-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌────────────────────┐   ┌────────────┐  │   │
//! │  │   │   Database    │   │ CollectionRepository│   │ Migrations │  │   │
//! │  │   │   (pool.rs)   │◄──│  load / save       │   │ (embedded) │  │   │
//! │  │   │  SqlitePool   │   │  keys / remove     │   │            │  │   │
//! │  │   └───────────────┘   └────────────────────┘   └────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (WAL)                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spice_store::{defaults, CollectionKey, Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("spice.db")).await?;
//! let menu = db.collections().load(CollectionKey::Menu, defaults::menu()).await?;
//! db.collections().save(CollectionKey::Menu, &menu).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod defaults;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::collection::{CollectionKey, CollectionRepository};
