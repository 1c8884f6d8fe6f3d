//! # Collection Repository
//!
//! Whole-collection reads and writes. There are no partial updates: every
//! save replaces the stored document for its key.
//!
//! ## Load Semantics
//! ```text
//! row present, payload parses   ──► stored value
//! row present, payload corrupt  ──► default  (warn! logged)
//! row absent                    ──► default
//! SQL failure                   ──► Err(DbError)
//! ```

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use std::fmt;
use tracing::{debug, warn};

use crate::error::DbResult;

// =============================================================================
// Collection Keys
// =============================================================================

/// The fixed set of stored collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Menu,
    Orders,
    Reservations,
    Settings,
    Users,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 5] = [
        CollectionKey::Menu,
        CollectionKey::Orders,
        CollectionKey::Reservations,
        CollectionKey::Settings,
        CollectionKey::Users,
    ];

    /// The row key. These names are shared with the web front end's
    /// browser storage, so they must not change.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CollectionKey::Menu => "admin_menu",
            CollectionKey::Orders => "admin_orders",
            CollectionKey::Reservations => "admin_reservations",
            CollectionKey::Settings => "admin_settings",
            CollectionKey::Users => "admin_users",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Repository
// =============================================================================

#[derive(Debug, Clone)]
pub struct CollectionRepository {
    pool: SqlitePool,
}

impl CollectionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        CollectionRepository { pool }
    }

    /// Loads a collection, falling back to `default` when the key is absent
    /// or its payload does not parse as `T`.
    pub async fn load<T>(&self, key: CollectionKey, default: T) -> DbResult<T>
    where
        T: DeserializeOwned,
    {
        let Some(payload) = self.load_raw(key).await? else {
            debug!(key = %key, "Collection absent, using default");
            return Ok(default);
        };

        match serde_json::from_str(&payload) {
            Ok(value) => {
                debug!(key = %key, bytes = payload.len(), "Collection loaded");
                Ok(value)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Stored collection is unreadable, using default");
                Ok(default)
            }
        }
    }

    /// The stored JSON document for `key`, if any.
    pub async fn load_raw(&self, key: CollectionKey) -> DbResult<Option<String>> {
        let payload = sqlx::query_scalar::<_, String>("SELECT payload FROM collections WHERE key = ?1")
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(payload)
    }

    /// Serializes `value` and replaces whatever is stored under `key`.
    pub async fn save<T>(&self, key: CollectionKey, value: &T) -> DbResult<()>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_string(value)?;
        self.save_raw(key, &payload).await
    }

    async fn save_raw(&self, key: CollectionKey, payload: &str) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO collections (key, payload, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key.as_str())
        .bind(payload)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        debug!(key = %key, bytes = payload.len(), "Collection saved");
        Ok(())
    }

    /// Keys currently stored, sorted.
    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys = sqlx::query_scalar::<_, String>("SELECT key FROM collections ORDER BY key")
            .fetch_all(&self.pool)
            .await?;
        Ok(keys)
    }

    pub async fn contains(&self, key: CollectionKey) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM collections WHERE key = ?1")
            .bind(key.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Deletes a stored collection. Returns whether a row was removed.
    pub async fn remove(&self, key: CollectionKey) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM collections WHERE key = ?1")
            .bind(key.as_str())
            .execute(&self.pool)
            .await?;

        debug!(key = %key, removed = result.rows_affected(), "Collection removed");
        Ok(result.rows_affected() > 0)
    }
}
