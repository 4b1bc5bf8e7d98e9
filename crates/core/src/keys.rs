//! Typed storage keys.
//!
//! Every persisted value lives under one fixed key. A [`StorageKey`] binds
//! that key to the record type stored there, so a collection can only be
//! read and written with its own type.

use std::fmt;
use std::marker::PhantomData;

use crate::types::{CurrentUser, Employee, InventoryItem, Sale};

/// A storage key together with the type of the value stored under it.
pub struct StorageKey<T> {
    name: &'static str,
    record: PhantomData<fn() -> T>,
}

impl<T> StorageKey<T> {
    /// Declare a key.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            record: PhantomData,
        }
    }

    /// The raw key string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for StorageKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StorageKey<T> {}

impl<T> fmt::Debug for StorageKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StorageKey").field(&self.name).finish()
    }
}

impl<T> fmt::Display for StorageKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The logged-in user, if any.
pub const CURRENT_USER: StorageKey<CurrentUser> = StorageKey::new("usuarioActual");

/// The inventory collection.
pub const INVENTORY: StorageKey<Vec<InventoryItem>> = StorageKey::new("inventario");

/// The employee collection.
pub const EMPLOYEES: StorageKey<Vec<Employee>> = StorageKey::new("empleados");

/// The sales collection.
pub const SALES: StorageKey<Vec<Sale>> = StorageKey::new("ventas");

/// Every key the panel reads or writes.
pub const ALL: [&str; 4] = [
    CURRENT_USER.name(),
    INVENTORY.name(),
    EMPLOYEES.name(),
    SALES.name(),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_match_storage_format() {
        assert_eq!(CURRENT_USER.name(), "usuarioActual");
        assert_eq!(INVENTORY.name(), "inventario");
        assert_eq!(EMPLOYEES.name(), "empleados");
        assert_eq!(SALES.name(), "ventas");
    }

    #[test]
    fn test_all_keys_are_distinct() {
        let mut keys = ALL.to_vec();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ALL.len());
    }
}
