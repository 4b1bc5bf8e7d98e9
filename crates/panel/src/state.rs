//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::controllers::{EmployeeController, InventoryController, ReportController, SalesController};
use crate::services::SessionManager;
use crate::store::JsonStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Controllers are built on demand; they are
/// thin views over the shared store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: JsonStore,
    write_lock: Mutex<()>,
}

impl AppState {
    /// Create a new application state over `store`.
    #[must_use]
    pub fn new(store: JsonStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Get a reference to the underlying store.
    #[must_use]
    pub fn store(&self) -> &JsonStore {
        &self.inner.store
    }

    #[must_use]
    pub fn sessions(&self) -> SessionManager {
        SessionManager::new(self.inner.store.clone())
    }

    #[must_use]
    pub fn inventory(&self) -> InventoryController {
        InventoryController::new(self.inner.store.clone())
    }

    #[must_use]
    pub fn employees(&self) -> EmployeeController {
        EmployeeController::new(self.inner.store.clone())
    }

    #[must_use]
    pub fn sales(&self) -> SalesController {
        SalesController::new(self.inner.store.clone())
    }

    #[must_use]
    pub fn reports(&self) -> ReportController {
        ReportController::new(self.inner.store.clone())
    }

    /// Run a load-modify-save cycle in the write section.
    ///
    /// Cycles run one at a time, so concurrent submissions cannot overwrite
    /// each other's changes. `cycle` runs on the blocking pool since the
    /// file backend writes to disk; it keeps the caller's tracing span.
    pub async fn write<T, F>(&self, cycle: F) -> T
    where
        F: FnOnce(&Self) -> T + Send + 'static,
        T: Send + 'static,
    {
        let _guard = self.inner.write_lock.lock().await;
        let state = self.clone();
        let span = tracing::Span::current();

        tokio::task::spawn_blocking(move || span.in_scope(|| cycle(&state)))
            .await
            .unwrap_or_else(|e| std::panic::resume_unwind(e.into_panic()))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.inner.store)
            .finish_non_exhaustive()
    }
}
