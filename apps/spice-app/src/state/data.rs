//! # Data State
//!
//! Every admin collection, loaded once at startup and written back
//! wholesale after each change.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  command ──► commit(db, Orders, |d| d.orders.update_status(..))         │
//! │                 │  keep a copy, mutate, snapshot     (locked)           │
//! │                 ▼                                                       │
//! │          collections().save(key, snapshot).await     (unlocked)         │
//! │                 │                                                       │
//! │                 ├── Ok  ──► keep the change                             │
//! │                 └── Err ──► put the copy of that collection back        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lock is a plain `std::sync::Mutex`; it is never held across an
//! `.await`.

use serde_json::Value;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

use spice_core::{
    MenuCatalog, MenuItem, Order, OrderBook, Reservation, ReservationBook, RestaurantSettings,
    User, UserDirectory,
};
use spice_store::{defaults, CollectionKey, Database, DbError, DbResult};

/// The in-memory collections.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub menu: MenuCatalog,
    pub orders: OrderBook,
    pub reservations: ReservationBook,
    pub settings: RestaurantSettings,
    pub users: UserDirectory,
}

impl Collections {
    /// The stored form of one collection.
    pub fn snapshot(&self, key: CollectionKey) -> serde_json::Result<Value> {
        match key {
            CollectionKey::Menu => serde_json::to_value(self.menu.list()),
            CollectionKey::Orders => serde_json::to_value(self.orders.orders()),
            CollectionKey::Reservations => serde_json::to_value(self.reservations.list()),
            CollectionKey::Settings => serde_json::to_value(&self.settings),
            CollectionKey::Users => serde_json::to_value(self.users.users()),
        }
    }

    /// Puts one collection back from `previous`, leaving the others alone.
    fn restore(&mut self, key: CollectionKey, previous: Collections) {
        match key {
            CollectionKey::Menu => self.menu = previous.menu,
            CollectionKey::Orders => self.orders = previous.orders,
            CollectionKey::Reservations => self.reservations = previous.reservations,
            CollectionKey::Settings => self.settings = previous.settings,
            CollectionKey::Users => self.users = previous.users,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    data: Arc<Mutex<Collections>>,
}

impl DataState {
    pub fn new(collections: Collections) -> Self {
        DataState {
            data: Arc::new(Mutex::new(collections)),
        }
    }

    /// Loads every collection, using the built-in defaults for any that are
    /// missing or unreadable.
    pub async fn load(db: &Database) -> DbResult<Self> {
        let repo = db.collections();

        let menu: Vec<MenuItem> = repo.load(CollectionKey::Menu, defaults::menu()).await?;
        let orders: Vec<Order> = repo.load(CollectionKey::Orders, defaults::orders()).await?;
        let reservations: Vec<Reservation> = repo
            .load(CollectionKey::Reservations, defaults::reservations())
            .await?;
        let settings = repo.load(CollectionKey::Settings, defaults::settings()).await?;
        let users: Vec<User> = repo.load(CollectionKey::Users, Vec::new()).await?;

        info!(
            menu = menu.len(),
            orders = orders.len(),
            reservations = reservations.len(),
            users = users.len(),
            "Collections loaded"
        );

        Ok(Self::new(Collections {
            menu: MenuCatalog::from_items(menu),
            orders: OrderBook::from_orders(orders),
            reservations: ReservationBook::from_reservations(reservations),
            settings,
            users: UserDirectory::from_users(users),
        }))
    }

    pub fn with_data<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Collections) -> R,
    {
        let data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        f(&data)
    }

    pub fn with_data_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Collections) -> R,
    {
        let mut data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut data)
    }

    /// Applies `f` and writes the `key` collection to the store.
    ///
    /// If `f` fails, or the write fails, that collection (including its id
    /// sequence) is put back as it was and the error is returned.
    pub async fn commit<F, R, E>(&self, db: &Database, key: CollectionKey, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut Collections) -> Result<R, E>,
        E: From<DbError>,
    {
        let (value, previous, snapshot) = {
            let mut data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
            let previous = data.clone();

            let value = match f(&mut data) {
                Ok(value) => value,
                Err(e) => {
                    data.restore(key, previous);
                    return Err(e);
                }
            };

            match data.snapshot(key) {
                Ok(snapshot) => (value, previous, snapshot),
                Err(e) => {
                    data.restore(key, previous);
                    return Err(DbError::from(e).into());
                }
            }
        };

        if let Err(e) = db.collections().save(key, &snapshot).await {
            warn!(key = %key, error = %e, "Save failed, change rolled back");
            self.with_data_mut(|d| d.restore(key, previous));
            return Err(e.into());
        }

        debug!(key = %key, "Collection persisted");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use spice_core::ReviewStatus;
    use spice_store::DbConfig;

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_fresh_store_loads_defaults() {
        let db = db().await;
        let data = DataState::load(&db).await.unwrap();

        data.with_data(|d| {
            assert_eq!(d.menu.len(), 8);
            assert_eq!(d.orders.len(), 2);
            assert_eq!(d.orders.next_id(), "ORD003");
            assert_eq!(d.reservations.len(), 1);
            assert_eq!(d.settings.name, "Spice & Soul");
            assert!(d.users.is_empty());
        });
    }

    #[tokio::test]
    async fn test_persisted_change_survives_reload() {
        let db = db().await;
        let data = DataState::load(&db).await.unwrap();

        data.commit(&db, CollectionKey::Orders, |d| {
            d.orders
                .update_status("ORD001", ReviewStatus::Approved)
                .map_err(ApiError::from)
        })
        .await
        .unwrap();

        let reloaded = DataState::load(&db).await.unwrap();
        let status = reloaded.with_data(|d| d.orders.get("ORD001").map(|o| o.status));
        assert_eq!(status, Some(ReviewStatus::Approved));
    }

    #[tokio::test]
    async fn test_unpersisted_change_is_lost() {
        let db = db().await;
        let data = DataState::load(&db).await.unwrap();

        data.with_data_mut(|d| d.menu.delete("m1"));

        let reloaded = DataState::load(&db).await.unwrap();
        assert!(reloaded.with_data(|d| d.menu.get("m1").is_some()));
    }

    #[test]
    fn test_snapshot_shapes() {
        let c = Collections::default();
        assert!(c.snapshot(CollectionKey::Menu).unwrap().is_array());
        assert!(c.snapshot(CollectionKey::Settings).unwrap().is_object());
    }

    #[tokio::test]
    async fn test_failed_save_rolls_back() {
        let db = db().await;
        let data = DataState::load(&db).await.unwrap();
        db.close().await;

        let result: Result<(), DbError> = data
            .commit(&db, CollectionKey::Menu, |d| {
                d.menu.delete("m1");
                Ok(())
            })
            .await;

        assert!(result.is_err());
        assert!(data.with_data(|d| d.menu.get("m1").is_some()));
    }

    #[tokio::test]
    async fn test_failed_mutation_rolls_back() {
        let db = db().await;
        let data = DataState::load(&db).await.unwrap();

        let result: Result<(), ApiError> = data
            .commit(&db, CollectionKey::Menu, |d| {
                d.menu.delete("m1");
                Err(ApiError::not_found("Menu item", "m1"))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(data.with_data(|d| d.menu.len()), 8);
    }
}
