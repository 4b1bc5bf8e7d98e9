//! Sales report page.

use askama::Template;
use askama_web::WebTemplate;

use almacen_core::CurrentUser;

use super::pages::{Page, Section};
use crate::{
    filters,
    state::AppState,
    store::StoreError,
    views::{SaleRow, sale_rows},
};

/// Sales report template.
#[derive(Template, WebTemplate)]
#[template(path = "reporte_ventas.html")]
pub struct SalesTemplate {
    pub page: &'static str,
    pub user_label: Option<String>,
    pub alert: Option<String>,
    pub rows: Vec<SaleRow>,
}

/// Render the sales report, seeding the sample sales on first use.
///
/// # Errors
///
/// Returns an error if the seed cannot be written.
pub async fn page(state: &AppState, user: &CurrentUser) -> Result<SalesTemplate, StoreError> {
    let sales = state.write(|state| state.sales().load()).await?;

    Ok(SalesTemplate {
        page: Page::from(Section::SalesReport).id(),
        user_label: Some(user.to_string()),
        alert: None,
        rows: sale_rows(&sales),
    })
}
