//! Inventory controller.

use almacen_core::InventoryItem;
use almacen_core::collection::remove_entry;
use almacen_core::keys::INVENTORY;
use almacen_core::validation::parse_item;

use super::ControllerError;
use crate::store::{JsonStore, StoreError};

/// Raw values submitted by the product form.
#[derive(Debug, Clone, Copy)]
pub struct ItemSubmission<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub price: &'a str,
    pub quantity: &'a str,
}

/// Loads, extends and trims the inventory collection.
#[derive(Debug, Clone)]
pub struct InventoryController {
    store: JsonStore,
}

impl InventoryController {
    #[must_use]
    pub const fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// The stored inventory, or an empty list.
    #[must_use]
    pub fn load(&self) -> Vec<InventoryItem> {
        self.store.get(INVENTORY, Vec::new())
    }

    /// Validate a form submission and append it.
    ///
    /// Returns the new item.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Invalid`] without touching the store if a
    /// field is blank or not numeric, or [`ControllerError::Store`] if the
    /// collection cannot be written.
    pub fn add(&self, form: ItemSubmission<'_>) -> Result<InventoryItem, ControllerError> {
        let item = parse_item(form.id, form.name, form.price, form.quantity)?;

        let mut items = self.load();
        items.push(item.clone());
        self.store.set(INVENTORY, &items)?;

        tracing::info!(
            id = %item.id,
            quantity = item.quantity,
            total_items = items.len(),
            "Inventory item added"
        );
        Ok(item)
    }

    /// Remove the row rendered at `index` showing `id`.
    ///
    /// Returns the removed item, or `None` if no entry carries `id` (in which
    /// case nothing is written).
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written.
    pub fn remove(&self, index: usize, id: &str) -> Result<Option<InventoryItem>, StoreError> {
        let mut items = self.load();
        let Some(removed) = remove_entry(&mut items, index, id) else {
            tracing::warn!(index, id, "Inventory item to remove not found");
            return Ok(None);
        };

        self.store.set(INVENTORY, &items)?;
        tracing::info!(index, id, total_items = items.len(), "Inventory item removed");
        Ok(Some(removed))
    }
}
