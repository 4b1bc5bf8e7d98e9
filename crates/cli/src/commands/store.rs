//! Store inspection and maintenance commands.
//!
//! # Usage
//!
//! ```bash
//! # Print the raw value of a key
//! almacen-cli --store data/almacen.json store show inventario
//!
//! # Decode every known key and report problems
//! almacen-cli store check
//!
//! # Write the sample sales if none are stored
//! almacen-cli store seed-sales
//!
//! # Remove one key, or all known keys
//! almacen-cli store clear usuarioActual
//! almacen-cli store clear
//! ```
//!
//! # Environment Variables
//!
//! - `ALMACEN_STORE_PATH` - Store file used when `--store` is not given

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;

use almacen_core::keys::{self, CURRENT_USER, EMPLOYEES, INVENTORY, SALES};
use almacen_core::{Sale, StorageKey};
use almacen_panel::store::{FileStore, JsonStore, StoreError};

/// Errors that can occur during store commands.
#[derive(Debug, Error)]
pub enum StoreCommandError {
    /// Neither `--store` nor the environment names a store file.
    #[error("Missing environment variable: {0} (or pass --store)")]
    MissingEnvVar(&'static str),

    /// Store access failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Key is not one the panel uses.
    #[error("Unknown key: {0}. Valid keys: {keys}", keys = keys::ALL.join(", "))]
    UnknownKey(String),

    /// `store check` found undecodable values.
    #[error("{0} stored value(s) failed to decode")]
    Corrupt(usize),

    /// Writing the report failed.
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

/// Open the store file given on the command line or in `ALMACEN_STORE_PATH`.
///
/// # Errors
///
/// Returns an error if no path is configured or the file cannot be read.
pub fn open(path: Option<PathBuf>) -> Result<JsonStore, StoreCommandError> {
    let path = path
        .or_else(|| std::env::var_os("ALMACEN_STORE_PATH").map(PathBuf::from))
        .ok_or(StoreCommandError::MissingEnvVar("ALMACEN_STORE_PATH"))?;

    tracing::debug!(path = %path.display(), "Opening store");
    Ok(JsonStore::new(Arc::new(FileStore::open(path)?)))
}

fn known_key(key: &str) -> Result<&'static str, StoreCommandError> {
    keys::ALL
        .into_iter()
        .find(|known| *known == key)
        .ok_or_else(|| StoreCommandError::UnknownKey(key.to_owned()))
}

/// Print the raw value stored under `key`.
///
/// # Errors
///
/// Returns an error for unknown keys or if output fails.
pub fn show(store: &JsonStore, key: &str, out: &mut impl Write) -> Result<(), StoreCommandError> {
    let key = known_key(key)?;
    match store.backend().get_item(key) {
        Some(raw) => writeln!(out, "{raw}")?,
        None => writeln!(out, "{key}: absent")?,
    }
    Ok(())
}

/// Outcome of decoding one key.
enum KeyStatus {
    Ok(String),
    Absent,
    Corrupt(StoreError),
}

fn inspect<T: DeserializeOwned>(
    store: &JsonStore,
    key: StorageKey<T>,
    summary: impl Fn(&T) -> String,
) -> KeyStatus {
    match store.try_get(key) {
        Ok(Some(value)) => KeyStatus::Ok(summary(&value)),
        Ok(None) => KeyStatus::Absent,
        Err(e) => KeyStatus::Corrupt(e),
    }
}

#[allow(clippy::ptr_arg)]
fn entries<T>(items: &Vec<T>) -> String {
    format!("{} entries", items.len())
}

/// Decode every known key and report its state.
///
/// # Errors
///
/// Returns [`StoreCommandError::Corrupt`] if any value fails to decode.
pub fn check(store: &JsonStore, out: &mut impl Write) -> Result<(), StoreCommandError> {
    let report = [
        (CURRENT_USER.name(), inspect(store, CURRENT_USER, ToString::to_string)),
        (INVENTORY.name(), inspect(store, INVENTORY, entries)),
        (EMPLOYEES.name(), inspect(store, EMPLOYEES, entries)),
        (SALES.name(), inspect(store, SALES, entries)),
    ];

    let mut corrupt = 0;
    for (key, status) in report {
        match status {
            KeyStatus::Ok(summary) => writeln!(out, "{key}: ok ({summary})")?,
            KeyStatus::Absent => writeln!(out, "{key}: absent")?,
            KeyStatus::Corrupt(e) => {
                corrupt += 1;
                tracing::warn!(key, error = %e, "Corrupt stored value");
                writeln!(out, "{key}: error: {e}")?;
            }
        }
    }

    if corrupt > 0 {
        return Err(StoreCommandError::Corrupt(corrupt));
    }
    Ok(())
}

/// Write the sample sales unless valid sales are already stored.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn seed_sales(store: &JsonStore, out: &mut impl Write) -> Result<(), StoreCommandError> {
    if let Some(sales) = store.get_optional(SALES) {
        writeln!(out, "{}: already present ({} entries)", SALES, sales.len())?;
        return Ok(());
    }

    let seed = Sale::seed();
    store.set(SALES, &seed)?;
    tracing::info!(count = seed.len(), "Seeded sample sales");
    writeln!(out, "{}: seeded {} entries", SALES, seed.len())?;
    Ok(())
}

/// Remove `key`, or every known key when `key` is `None`.
///
/// # Errors
///
/// Returns an error for unknown keys or if the store cannot be written.
pub fn clear(store: &JsonStore, key: Option<&str>, out: &mut impl Write) -> Result<(), StoreCommandError> {
    let targets = match key {
        Some(key) => vec![known_key(key)?],
        None => keys::ALL.to_vec(),
    };

    for key in targets {
        store.backend().remove_item(key)?;
        tracing::info!(key, "Key removed");
        writeln!(out, "{key}: removed")?;
    }
    Ok(())
}
