//! Key-value store adapter.
//!
//! The panel keeps all of its state in a string-keyed store holding JSON
//! documents, one document per key. [`KeyValueStore`] is the raw capability
//! (strings in, strings out); [`JsonStore`] layers typed JSON access on top.
//!
//! # Backends
//!
//! - [`MemoryStore`] - process-local map, used by default and in tests
//! - [`FileStore`] - one JSON file on disk, rewritten after every change
//!
//! # Failure policy
//!
//! Reads never fail: a missing key, an empty value or a value that does not
//! decode as the requested type yields the caller's default, and the decode
//! failure is logged. [`JsonStore::try_get`] is the strict variant for
//! callers that want to see corruption.

pub mod file;
pub mod memory;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use almacen_core::StorageKey;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized.
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A stored value is not valid for the requested type.
    #[error("failed to decode {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A string-keyed persistent store.
///
/// Implementations must make each single operation atomic; callers that
/// read, modify and write a value back are responsible for serializing
/// those cycles.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set_item(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Delete `key`. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be persisted.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;

    /// All keys currently present, sorted.
    fn keys(&self) -> Vec<String>;
}

/// Typed JSON access to a [`KeyValueStore`].
///
/// Cheaply cloneable; clones share the same backend.
#[derive(Clone)]
pub struct JsonStore {
    backend: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for JsonStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonStore")
            .field("keys", &self.backend.keys())
            .finish()
    }
}

impl JsonStore {
    /// Wrap a backend.
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// A store backed by a fresh [`MemoryStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// The raw backend.
    #[must_use]
    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    /// Read `key`, or `default` if it is absent or undecodable.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: StorageKey<T>, default: T) -> T {
        self.get_optional(key).unwrap_or(default)
    }

    /// Read `key`, or `None` if it is absent or undecodable.
    #[must_use]
    pub fn get_optional<T: DeserializeOwned>(&self, key: StorageKey<T>) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Ignoring undecodable stored value");
                None
            }
        }
    }

    /// Read and decode `key`.
    ///
    /// Returns `Ok(None)` when the key is absent or holds an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] if the stored value is not a valid `T`.
    pub fn try_get<T: DeserializeOwned>(&self, key: StorageKey<T>) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.get_item(key.name()) else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                key: key.name().to_string(),
                source,
            })
    }

    /// Serialize `value` and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be encoded or persisted.
    pub fn set<T: Serialize>(&self, key: StorageKey<T>, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.name().to_string(),
            source,
        })?;
        self.backend.set_item(key.name(), raw)
    }

    /// Delete `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be persisted.
    pub fn remove<T>(&self, key: StorageKey<T>) -> Result<(), StoreError> {
        self.backend.remove_item(key.name())
    }
}
