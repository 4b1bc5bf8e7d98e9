//! Page dispatcher.
//!
//! Every page is served at `/{id}.html` (the suffix is optional). The login
//! page is public; every other page requires a session and answers with a
//! redirect to the login page when there is none, before anything is read
//! or written.

use std::fmt;
use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use almacen_core::CurrentUser;

use super::{auth, employees, inventory, panel, reports, sales};
use crate::error::{AppError, set_sentry_user};
use crate::state::AppState;

/// A page that requires a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Panel,
    Inventory,
    Employees,
    SalesReport,
    StockReport,
}

/// Every page the panel serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Protected(Section),
}

impl Page {
    pub const ALL: [Self; 6] = [
        Self::Login,
        Self::Protected(Section::Panel),
        Self::Protected(Section::Inventory),
        Self::Protected(Section::Employees),
        Self::Protected(Section::SalesReport),
        Self::Protected(Section::StockReport),
    ];

    /// The identifier declared in `<body data-page="...">`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Protected(Section::Panel) => "panel",
            Self::Protected(Section::Inventory) => "inventario",
            Self::Protected(Section::Employees) => "empleados",
            Self::Protected(Section::SalesReport) => "reporte-ventas",
            Self::Protected(Section::StockReport) => "reporte-inventario",
        }
    }

    /// Canonical URL of the page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login.html",
            Self::Protected(Section::Panel) => "/panel.html",
            Self::Protected(Section::Inventory) => "/inventario.html",
            Self::Protected(Section::Employees) => "/empleados.html",
            Self::Protected(Section::SalesReport) => "/reporte-ventas.html",
            Self::Protected(Section::StockReport) => "/reporte-inventario.html",
        }
    }

    #[must_use]
    pub const fn is_protected(self) -> bool {
        matches!(self, Self::Protected(_))
    }
}

impl From<Section> for Page {
    fn from(section: Section) -> Self {
        Self::Protected(section)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown page identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPage(pub String);

impl fmt::Display for UnknownPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown page: {}", self.0)
    }
}

impl std::error::Error for UnknownPage {}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_suffix(".html").unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|page| page.id() == id)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Query parameters accepted by the pages.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Login failure code.
    pub error: Option<String>,
    /// Stock report threshold.
    pub stock_maximo: Option<String>,
}

/// `GET /` sends the browser to the panel.
pub async fn index() -> Redirect {
    Redirect::to(Page::Protected(Section::Panel).path())
}

/// `GET /{page}` renders the requested page.
#[instrument(skip(state, query))]
pub async fn show(
    State(state): State<AppState>,
    Path(page): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let page: Page = page
        .parse()
        .map_err(|e: UnknownPage| AppError::NotFound(e.0))?;

    match page {
        Page::Login => Ok(auth::login_page(query.error.as_deref()).into_response()),
        Page::Protected(section) => {
            let user = match state.sessions().require_auth() {
                Ok(user) => user,
                Err(rejection) => return Ok(rejection.into_response()),
            };
            set_sentry_user(&user.username);
            render_section(&state, section, &user, &query).await
        }
    }
}

async fn render_section(
    state: &AppState,
    section: Section,
    user: &CurrentUser,
    query: &PageQuery,
) -> Result<Response, AppError> {
    let response = match section {
        Section::Panel => panel::page(user).into_response(),
        Section::Inventory => inventory::page(state, user).into_response(),
        Section::Employees => employees::page(state, user).into_response(),
        Section::SalesReport => sales::page(state, user).await?.into_response(),
        Section::StockReport => {
            reports::page(state, user, query.stock_maximo.as_deref()).into_response()
        }
    };
    Ok(response)
}
