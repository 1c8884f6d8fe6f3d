//! # Menu Catalog
//!
//! The dishes customers can order, as maintained from the admin menu page.
//! Dishes keep their insertion order; new dishes go to the end.

use uuid::Uuid;

use crate::error::CoreResult;
use crate::types::{MenuCategory, MenuItem, MenuItemDraft};
use crate::validation::{validate_item_name, validate_menu_item, validate_price_cents, validate_spice_level};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        MenuCatalog { items }
    }

    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Dishes in one menu tab.
    pub fn by_category(&self, category: MenuCategory) -> Vec<&MenuItem> {
        self.items.iter().filter(|i| i.category == category).collect()
    }

    /// Case-insensitive match on dish name or category label.
    pub fn search(&self, term: &str) -> Vec<&MenuItem> {
        let needle = term.trim().to_lowercase();
        self.items
            .iter()
            .filter(|i| {
                needle.is_empty()
                    || i.name.to_lowercase().contains(&needle)
                    || i.category.label().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Validates `draft` and appends it under a fresh UUID.
    pub fn add(&mut self, draft: MenuItemDraft) -> CoreResult<MenuItem> {
        validate_menu_item(&draft)?;
        let item = draft.with_id(Uuid::new_v4().to_string());
        self.items.push(item.clone());
        Ok(item)
    }

    /// Replaces the dish with the same id.
    ///
    /// Returns `Ok(false)` when no dish has that id.
    pub fn update(&mut self, item: MenuItem) -> CoreResult<bool> {
        validate_item_name(&item.name)?;
        validate_price_cents(item.price_cents)?;
        validate_spice_level(item.spice_level)?;

        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(slot) => {
                *slot = item;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes a dish. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    pub fn into_items(self) -> Vec<MenuItem> {
        self.items
    }
}
