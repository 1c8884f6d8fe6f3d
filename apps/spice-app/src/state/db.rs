//! # Database State
//!
//! Wraps the store handle for commands. The underlying `SqlitePool` is
//! already thread-safe, so no lock is needed here.

use spice_store::Database;

#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// ```rust,ignore
    /// db_state.inner().collections().save(CollectionKey::Menu, &menu).await?;
    /// ```
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
