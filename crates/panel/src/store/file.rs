//! File-backed store.
//!
//! All keys live in one JSON object mapping key to stored string, the same
//! shape a browser keeps for an origin's local storage. The file is loaded
//! once at open and rewritten whole after every change, through a temporary
//! file and a rename so a crash never leaves a half-written store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use super::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] persisted to a single JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, creating parent directories as needed.
    ///
    /// A missing file opens as an empty store. A file that is not a JSON
    /// object of strings also opens empty (with a warning) and is replaced
    /// on the next write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if the
    /// parent directory cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let items = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Store file is corrupt, starting empty"
                );
                BTreeMap::new()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), keys = items.len(), "Opened store file");

        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the contents, persist it, then commit.
    ///
    /// The in-memory view only changes if the file was written.
    fn update(
        &self,
        change: impl FnOnce(&mut BTreeMap<String, String>),
    ) -> Result<(), StoreError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = items.clone();
        change(&mut next);
        self.persist(&next)?;
        *items = next;
        Ok(())
    }

    fn persist(&self, items: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(items).map_err(|source| StoreError::Encode {
            key: self.path.display().to_string(),
            source,
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.update(|items| {
            items.insert(key.to_string(), value);
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.update(|items| {
            items.remove(key);
        })
    }

    fn keys(&self) -> Vec<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("almacen.json")).unwrap();
        assert!(store.keys().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("datos").join("almacen.json");

        let store = FileStore::open(&path).unwrap();
        store.set_item("inventario", "[]".to_string()).unwrap();
        store
            .set_item("usuarioActual", r#"{"username":"admin","rol":"Administrador"}"#.to_string())
            .unwrap();
        store.remove_item("usuarioActual").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get_item("inventario").as_deref(), Some("[]"));
        assert!(reopened.get_item("usuarioActual").is_none());
    }

    #[test]
    fn test_corrupt_file_opens_empty_and_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("almacen.json");
        fs::write(&path, "esto no es json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.keys().is_empty());

        store.set_item("ventas", "[]".to_string()).unwrap();
        let on_disk: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk.get("ventas").map(String::as_str), Some("[]"));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("almacen.json");
        let store = FileStore::open(&path).unwrap();
        store.set_item("empleados", "[]".to_string()).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, [std::ffi::OsString::from("almacen.json")]);
    }
}
