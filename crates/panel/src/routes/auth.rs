//! Login and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use almacen_core::CurrentUser;

use super::pages::{Page, PageQuery};
use super::{LOGIN_PATH, PANEL_PATH};
use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::services::authenticate;
use crate::state::AppState;

/// Query code sent back to the login page after bad credentials.
pub const CREDENTIALS_ERROR: &str = "credenciales";

/// Login form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub usuario: String,
    pub contrasena: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub page: &'static str,
    pub user_label: Option<String>,
    pub alert: Option<String>,
}

/// Banner text for a login error code. Unknown codes show nothing.
#[must_use]
pub fn login_error_message(code: &str) -> Option<&'static str> {
    match code {
        CREDENTIALS_ERROR => Some("Usuario o contraseña incorrectos."),
        _ => None,
    }
}

/// Render the login page.
#[must_use]
pub fn login_page(error: Option<&str>) -> LoginTemplate {
    LoginTemplate {
        page: Page::Login.id(),
        user_label: None,
        alert: error.and_then(login_error_message).map(str::to_string),
    }
}

/// `GET /login`, same as `/login.html`.
pub async fn show_login(Query(query): Query<PageQuery>) -> LoginTemplate {
    login_page(query.error.as_deref())
}

/// Handle login form submission.
///
/// Valid credentials start a session and redirect to the panel; anything
/// else redirects back to the login page with an error code.
#[instrument(skip_all, fields(username = %form.usuario.trim()))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    let Some(user) = authenticate(&form.usuario, &form.contrasena) else {
        tracing::warn!("Login failed");
        return Ok(Redirect::to(&format!("{LOGIN_PATH}?error={CREDENTIALS_ERROR}")));
    };

    let current = CurrentUser::from(user);
    state
        .write(move |state| state.sessions().set_current_user(&current))
        .await?;
    set_sentry_user(user.username);

    Ok(Redirect::to(PANEL_PATH))
}

/// End the session and return to the login page.
#[instrument(skip_all)]
pub async fn logout(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.write(|state| state.sessions().logout()).await?;
    clear_sentry_user();

    Ok(Redirect::to(LOGIN_PATH))
}
