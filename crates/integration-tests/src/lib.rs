//! Integration tests for Almacén.
//!
//! Tests drive the full panel router in-process with
//! `tower::ServiceExt::oneshot`; no server or network is involved. Each
//! [`TestApp`] owns a fresh in-memory store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p almacen-integration-tests
//! ```

#![allow(clippy::missing_panics_doc)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

use almacen_panel::{
    routes,
    state::AppState,
    store::{JsonStore, KeyValueStore, MemoryStore},
};

/// Status, redirect target and body of a finished request.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Assert a 303 redirect to `target`.
    #[track_caller]
    pub fn assert_redirect(&self, target: &str) {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "body: {}", self.body);
        assert_eq!(self.location.as_deref(), Some(target));
    }
}

/// The panel router over a fresh store.
pub struct TestApp {
    pub router: Router,
    pub store: JsonStore,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// A panel over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_backend(Arc::new(MemoryStore::new()))
    }

    /// A panel whose store starts with the given raw values.
    #[must_use]
    pub fn with_items(items: &[(&str, &str)]) -> Self {
        Self::with_backend(Arc::new(MemoryStore::with_items(
            items.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())),
        )))
    }

    /// A panel over any backend, such as a file store.
    #[must_use]
    pub fn with_backend(backend: Arc<dyn KeyValueStore>) -> Self {
        let store = JsonStore::new(backend);
        let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../panel/static");
        let router = routes::app(AppState::new(store.clone()), static_dir);
        Self { router, store }
    }

    /// Raw value stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.store.backend().get_item(key)
    }

    /// Stored value under `key` parsed as JSON.
    #[must_use]
    pub fn json(&self, key: &str) -> Option<serde_json::Value> {
        self.raw(key)
            .map(|raw| serde_json::from_str(&raw).expect("stored value is JSON"))
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
    }

    /// Submit a urlencoded form.
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .expect("valid request"),
        )
        .await
    }

    /// Log in through the form.
    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.post_form("/login", &[("usuario", username), ("contrasena", password)])
            .await
    }

    /// Log in as the demo administrator.
    pub async fn login_admin(&self) {
        self.login("admin", "1234").await.assert_redirect("/panel.html");
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
