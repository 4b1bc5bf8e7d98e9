//! Inventory-by-stock report page.
//!
//! The threshold form submits with GET, so the report is a plain page
//! load: `/reporte-inventario.html?stock_maximo=5`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use almacen_core::CurrentUser;

use super::pages::{Page, Section};
use crate::{
    filters,
    state::AppState,
    views::{StockReport, stock_report},
};

/// Stock report template.
#[derive(Template, WebTemplate)]
#[template(path = "reporte_inventario.html")]
pub struct StockReportTemplate {
    pub page: &'static str,
    pub user_label: Option<String>,
    pub alert: Option<String>,
    /// Threshold as submitted, echoed back into the input.
    pub stock_maximo: String,
    pub report: StockReport,
}

/// Render the report for an optional raw threshold.
///
/// Without a threshold the table is empty. An invalid threshold shows the
/// error with an empty table and status 422; the inventory is not read.
#[must_use]
pub fn page(state: &AppState, user: &CurrentUser, stock_maximo: Option<&str>) -> Response {
    let mut template = StockReportTemplate {
        page: Page::from(Section::StockReport).id(),
        user_label: Some(user.to_string()),
        alert: None,
        stock_maximo: stock_maximo.unwrap_or_default().to_string(),
        report: StockReport::NotRequested,
    };

    let Some(raw) = stock_maximo else {
        return template.into_response();
    };

    match state.reports().low_stock(raw) {
        Ok(query) => {
            template.report = stock_report(query.threshold, &query.items);
            template.into_response()
        }
        Err(err) => {
            template.alert = Some(err.to_string());
            (StatusCode::UNPROCESSABLE_ENTITY, template).into_response()
        }
    }
}
