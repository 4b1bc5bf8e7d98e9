//! Inventory page and form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use almacen_core::CurrentUser;

use super::pages::{Page, Section};
use crate::{
    controllers::{ControllerError, inventory::ItemSubmission},
    error::AppError,
    filters,
    middleware::RequireAuth,
    state::AppState,
    views::{InventoryRow, inventory_rows},
};

const INVENTORY_PAGE: Page = Page::Protected(Section::Inventory);

/// Product form data. Missing fields read as empty.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ItemForm {
    pub id: String,
    pub nombre: String,
    pub precio: String,
    pub cantidad: String,
}

impl ItemForm {
    fn submission(&self) -> ItemSubmission<'_> {
        ItemSubmission {
            id: &self.id,
            name: &self.nombre,
            price: &self.precio,
            quantity: &self.cantidad,
        }
    }
}

/// Delete button payload: the rendered position and the id shown there.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub index: usize,
    pub id: String,
}

/// Inventory page template.
#[derive(Template, WebTemplate)]
#[template(path = "inventario.html")]
pub struct InventoryTemplate {
    pub page: &'static str,
    pub user_label: Option<String>,
    pub alert: Option<String>,
    pub rows: Vec<InventoryRow>,
    /// Values to prefill, kept after a rejected submission.
    pub form: ItemForm,
}

fn render(state: &AppState, user: &CurrentUser, alert: Option<String>, form: ItemForm) -> InventoryTemplate {
    InventoryTemplate {
        page: INVENTORY_PAGE.id(),
        user_label: Some(user.to_string()),
        alert,
        rows: inventory_rows(&state.inventory().load()),
        form,
    }
}

/// Render the inventory page with an empty form.
#[must_use]
pub fn page(state: &AppState, user: &CurrentUser) -> InventoryTemplate {
    render(state, user, None, ItemForm::default())
}

/// Add a product.
///
/// On success redirects back to the inventory page; a rejected form is
/// re-rendered with the message and the submitted values.
#[instrument(skip_all, fields(id = %form.id))]
pub async fn add(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> Result<Response, AppError> {
    let submitted = form.clone();
    let added = state
        .write(move |state| state.inventory().add(submitted.submission()))
        .await;

    match added {
        Ok(_) => Ok(Redirect::to(INVENTORY_PAGE.path()).into_response()),
        Err(ControllerError::Invalid(err)) => {
            tracing::debug!(error = %err, "Inventory form rejected");
            let template = render(&state, &user, Some(err.to_string()), form);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response())
        }
        Err(ControllerError::Store(err)) => Err(err.into()),
    }
}

/// Remove the product rendered at `index`.
#[instrument(skip_all, fields(index = form.index, id = %form.id))]
pub async fn remove(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Form(form): Form<RemoveForm>,
) -> Result<Redirect, AppError> {
    state
        .write(move |state| state.inventory().remove(form.index, &form.id))
        .await?;

    Ok(Redirect::to(INVENTORY_PAGE.path()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use almacen_core::Role;

    use super::*;
    use crate::store::JsonStore;

    fn admin() -> CurrentUser {
        CurrentUser {
            username: "admin".to_string(),
            role: Role::Administrador,
        }
    }

    #[test]
    fn test_page_lists_rows_with_delete_buttons() {
        let state = AppState::new(JsonStore::in_memory());
        state
            .inventory()
            .add(ItemSubmission {
                id: "P1",
                name: "Pan",
                price: "10",
                quantity: "5",
            })
            .unwrap();

        let html = page(&state, &admin()).render().unwrap();
        assert!(html.contains(r#"data-page="inventario""#));
        assert!(html.contains(r#"id="tabla-inventario""#));
        assert!(html.contains("10.00"));
        assert!(html.contains(r#"name="index" value="0""#));
    }

    #[test]
    fn test_rejected_form_keeps_values_and_escapes() {
        let state = AppState::new(JsonStore::in_memory());
        let form = ItemForm {
            id: "P1".to_string(),
            nombre: "<b>Pan</b>".to_string(),
            precio: "diez".to_string(),
            cantidad: "5".to_string(),
        };

        let html = render(&state, &admin(), Some("Completa".to_string()), form)
            .render()
            .unwrap();
        assert!(html.contains(r#"value="diez""#));
        assert!(html.contains("&lt;b&gt;Pan&lt;/b&gt;") || html.contains("&#60;b&#62;Pan&#60;/b&#62;"));
        assert!(!html.contains("<b>Pan</b>"));
    }
}
