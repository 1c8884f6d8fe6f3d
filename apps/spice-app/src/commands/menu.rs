//! # Menu Commands
//!
//! Browsing for customers, editing for admins. Every edit writes the whole
//! menu collection back to the store.

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{DataState, DbState};
use spice_core::{MenuCategory, MenuItem, MenuItemDraft};
use spice_store::CollectionKey;

pub fn list_menu(data: &DataState) -> Vec<MenuItem> {
    debug!("list_menu command");
    data.with_data(|d| d.menu.list().to_vec())
}

pub fn menu_by_category(data: &DataState, category: MenuCategory) -> Vec<MenuItem> {
    debug!(category = %category, "menu_by_category command");
    data.with_data(|d| d.menu.by_category(category).into_iter().cloned().collect())
}

/// Admin menu search by dish name or category.
pub fn search_menu(data: &DataState, query: String) -> Vec<MenuItem> {
    debug!(query = %query, "search_menu command");
    data.with_data(|d| d.menu.search(&query).into_iter().cloned().collect())
}

pub async fn add_menu_item(
    db: &DbState,
    data: &DataState,
    draft: MenuItemDraft,
) -> Result<MenuItem, ApiError> {
    debug!(name = %draft.name, "add_menu_item command");

    let item = data
        .commit(db.inner(), CollectionKey::Menu, |d| {
            d.menu.add(draft).map_err(ApiError::from)
        })
        .await?;

    info!(item_id = %item.id, name = %item.name, "Menu item added");
    Ok(item)
}

/// Replaces a dish wholesale. Carts keep the price they were filled at.
pub async fn update_menu_item(
    db: &DbState,
    data: &DataState,
    item: MenuItem,
) -> Result<MenuItem, ApiError> {
    debug!(item_id = %item.id, "update_menu_item command");

    data.commit(db.inner(), CollectionKey::Menu, |d| {
        if d.menu.update(item.clone())? {
            Ok(())
        } else {
            Err(ApiError::not_found("Menu item", &item.id))
        }
    })
    .await?;

    info!(item_id = %item.id, "Menu item updated");
    Ok(item)
}

/// Returns `false` if no dish had that id.
pub async fn delete_menu_item(db: &DbState, data: &DataState, id: String) -> Result<bool, ApiError> {
    debug!(id = %id, "delete_menu_item command");

    if data.with_data(|d| d.menu.get(&id).is_none()) {
        return Ok(false);
    }

    let removed = data
        .commit(db.inner(), CollectionKey::Menu, |d| {
            Ok::<_, ApiError>(d.menu.delete(&id))
        })
        .await?;
    info!(item_id = %id, "Menu item deleted");

    Ok(removed)
}
