//! # Spice & Soul Application Library
//!
//! Session state and commands for the Spice & Soul ordering site and its
//! admin panel. A front end opens a [`Session`] once and calls command
//! functions with the pieces of state each one needs.
//!
//! ## Module Organization
//! ```text
//! spice_app/
//! ├── lib.rs          ◄─── You are here (exports, logging setup)
//! ├── bootstrap.rs    ◄─── Session startup, default admin, seeding
//! ├── auth.rs         ◄─── Password hashing
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── data.rs     ◄─── Loaded collections
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/       ◄─── One function per front-end action
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management
//! Instead of a single `AppState` struct, there are several focused state
//! types, and each command takes only the ones it touches:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌────────────┐ ┌──────────────┐ ┌────────────────┐ ┌──────────────┐   │
//! │  │  DbState   │ │  CartState   │ │   DataState    │ │ ConfigState  │   │
//! │  │            │ │              │ │                │ │              │   │
//! │  │ • pool     │ │ • cart lines │ │ • menu         │ │ • currency   │   │
//! │  │ • store    │ │ • coupon %   │ │ • orders       │ │ • tax rate   │   │
//! │  │            │ │ • coupons    │ │ • reservations │ │ • store file │   │
//! │  │            │ │              │ │ • settings     │ │              │   │
//! │  │            │ │              │ │ • users        │ │              │   │
//! │  └────────────┘ └──────────────┘ └────────────────┘ └──────────────┘   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod state;

pub use bootstrap::Session;
pub use error::{ApiError, ErrorCode};

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug`: show every command call
/// - `RUST_LOG=spice=trace`: trace for the spice crates only
/// - Default: `info,spice=debug,sqlx=warn`
///
/// Calling it again is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,spice=debug,sqlx=warn"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::bootstrap::{ensure_default_admin, Session};
    use crate::state::ConfigState;
    use spice_store::DbConfig;

    /// A fresh in-memory session with the built-in collections and no users.
    pub async fn session() -> Session {
        Session::open(ConfigState::default(), DbConfig::in_memory())
            .await
            .unwrap()
    }

    /// Same as [`session`] plus the default admin account.
    pub async fn admin_session() -> Session {
        let s = session().await;
        ensure_default_admin(&s.db, &s.data).await.unwrap();
        s
    }
}
