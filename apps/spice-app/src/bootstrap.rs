//! # Session Bootstrap
//!
//! Opens the store, loads every collection and makes sure someone can log in.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. Resolve the store file (SPICE_DB_PATH or the platform data dir)     │
//! │  2. Connect (SQLite, WAL) and run pending migrations                    │
//! │  3. Load each collection, falling back to the built-in defaults         │
//! │  4. Create the default admin if there are no users                      │
//! │  5. Build the session state (db, cart, data, config)                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use crate::auth::{hash_password, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD};
use crate::error::ApiError;
use crate::state::{CartState, ConfigState, DataState, DbState};
use spice_core::{User, UserDirectory, UserRole};
use spice_store::{defaults, CollectionKey, Database, DbConfig};

/// Everything a running front end needs.
#[derive(Debug, Clone)]
pub struct Session {
    pub db: DbState,
    pub cart: CartState,
    pub data: DataState,
    pub config: ConfigState,
}

impl Session {
    /// Opens the configured store file and seeds the default admin.
    pub async fn start(config: ConfigState) -> Result<Self, ApiError> {
        let db_path = config.database_path()?;
        info!(?db_path, "Database path determined");

        let session = Self::open(config, DbConfig::new(db_path)).await?;
        ensure_default_admin(&session.db, &session.data).await?;

        info!("Session ready");
        Ok(session)
    }

    /// Opens a session against an explicit store without creating any
    /// accounts.
    pub async fn open(config: ConfigState, db_config: DbConfig) -> Result<Self, ApiError> {
        let db = Database::new(db_config).await?;
        info!("Database connected and migrations applied");

        let data = DataState::load(&db).await?;
        let cart = CartState::new(config.tax_rate());

        Ok(Session {
            db: DbState::new(db),
            cart,
            data,
            config,
        })
    }
}

/// The account created on first start.
pub fn default_admin() -> Result<User, ApiError> {
    let mut users = UserDirectory::default();
    users.add(
        DEFAULT_ADMIN_NAME,
        DEFAULT_ADMIN_EMAIL,
        hash_password(DEFAULT_ADMIN_PASSWORD)?,
        UserRole::Admin,
    )?;
    users
        .into_users()
        .pop()
        .ok_or_else(|| ApiError::internal("Failed to create default admin"))
}

/// Adds the default admin when the users collection is empty.
///
/// Returns `true` if the account was created.
pub async fn ensure_default_admin(db: &DbState, data: &DataState) -> Result<bool, ApiError> {
    if !data.with_data(|d| d.users.is_empty()) {
        return Ok(false);
    }

    let admin = default_admin()?;
    data.commit(db.inner(), CollectionKey::Users, |d| {
        d.users = UserDirectory::from_users(vec![admin]);
        Ok::<_, ApiError>(())
    })
    .await?;

    info!(email = DEFAULT_ADMIN_EMAIL, "Default admin created");
    Ok(true)
}

/// Writes the built-in value of every collection the store does not have
/// yet. Existing collections are left alone.
///
/// Returns the keys that were written.
pub async fn seed_defaults(db: &Database) -> Result<Vec<CollectionKey>, ApiError> {
    let repo = db.collections();
    let mut written = Vec::new();

    for key in CollectionKey::ALL {
        if repo.contains(key).await? {
            continue;
        }

        match key {
            CollectionKey::Menu => repo.save(key, &defaults::menu()).await?,
            CollectionKey::Orders => repo.save(key, &defaults::orders()).await?,
            CollectionKey::Reservations => repo.save(key, &defaults::reservations()).await?,
            CollectionKey::Settings => repo.save(key, &defaults::settings()).await?,
            CollectionKey::Users => repo.save(key, &vec![default_admin()?]).await?,
        }
        written.push(key);
    }

    info!(written = written.len(), "Default collections seeded");
    Ok(written)
}
