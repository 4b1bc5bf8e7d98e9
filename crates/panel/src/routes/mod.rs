//! HTTP route handlers for the panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//! GET  /                       - Redirect to the panel
//! GET  /{page}                 - Page dispatcher (login, panel, inventario,
//!                                empleados, reporte-ventas, reporte-inventario;
//!                                `.html` suffix optional)
//!
//! # Auth
//! GET  /login                  - Login page (same as /login.html)
//! POST /login                  - Credential check, start session
//! POST /logout                 - End session
//!
//! # Collections (require session)
//! POST /inventario/agregar     - Add inventory item
//! POST /inventario/eliminar    - Remove inventory item (index + id)
//! POST /empleados/agregar      - Add employee
//!
//! GET  /static/*               - Stylesheet
//! ```

pub mod auth;
pub mod employees;
pub mod inventory;
pub mod pages;
pub mod panel;
pub mod reports;
pub mod sales;

use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::state::AppState;

pub use pages::{Page, Section};

/// Where unauthenticated requests are sent.
pub const LOGIN_PATH: &str = Page::Login.path();

/// Landing page after login.
pub const PANEL_PATH: &str = Page::Protected(Section::Panel).path();

/// Create the page and form routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/{page}", get(pages::show))
        .route("/login", get(auth::show_login).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/inventario/agregar", post(inventory::add))
        .route("/inventario/eliminar", post(inventory::remove))
        .route("/empleados/agregar", post(employees::add))
}

/// Build the complete application router over `state`.
///
/// Static files are served from `static_dir`. Sentry layers are added by
/// the binary.
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
