//! Employee page and form handler.

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
    controllers::ControllerError,
    error::AppError,
    filters,
    middleware::RequireAuth,
    state::AppState,
    views::{EmployeeRow, employee_rows},
};

const EMPLOYEES_PAGE: Page = Page::Protected(Section::Employees);

/// Employee form data. Missing fields read as empty.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct EmployeeForm {
    pub id: String,
    pub nombre: String,
    pub puesto: String,
}

/// Employee page template.
#[derive(Template, WebTemplate)]
#[template(path = "empleados.html")]
pub struct EmployeesTemplate {
    pub page: &'static str,
    pub user_label: Option<String>,
    pub alert: Option<String>,
    pub rows: Vec<EmployeeRow>,
    pub form: EmployeeForm,
}

fn render(state: &AppState, user: &CurrentUser, alert: Option<String>, form: EmployeeForm) -> EmployeesTemplate {
    EmployeesTemplate {
        page: EMPLOYEES_PAGE.id(),
        user_label: Some(user.to_string()),
        alert,
        rows: employee_rows(&state.employees().load()),
        form,
    }
}

/// Render the employee page with an empty form.
#[must_use]
pub fn page(state: &AppState, user: &CurrentUser) -> EmployeesTemplate {
    render(state, user, None, EmployeeForm::default())
}

/// Add an employee.
#[instrument(skip_all, fields(id = %form.id))]
pub async fn add(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Form(form): Form<EmployeeForm>,
) -> Result<Response, AppError> {
    let submitted = form.clone();
    let added = state
        .write(move |state| {
            state
                .employees()
                .add(&submitted.id, &submitted.nombre, &submitted.puesto)
        })
        .await;

    match added {
        Ok(_) => Ok(Redirect::to(EMPLOYEES_PAGE.path()).into_response()),
        Err(ControllerError::Invalid(err)) => {
            tracing::debug!(error = %err, "Employee form rejected");
            let template = render(&state, &user, Some(err.to_string()), form);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response())
        }
        Err(ControllerError::Store(err)) => Err(err.into()),
    }
}
