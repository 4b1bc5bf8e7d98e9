//! Authentication extractor for form handlers.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

use almacen_core::CurrentUser;

use crate::routes::LOGIN_PATH;
use crate::state::AppState;

/// Extractor that requires a logged-in user.
///
/// Without a session the request is answered with a redirect to the login
/// page and the handler never runs.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(RequireAuth(user): RequireAuth) -> impl IntoResponse {
///     format!("Hola, {}!", user.username)
/// }
/// ```
#[derive(Debug)]
pub struct RequireAuth(pub CurrentUser);

/// Returned when a protected page or action is requested without a session.
#[derive(Debug)]
pub enum AuthRejection {
    /// Send the browser to the login page.
    RedirectToLogin,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state.sessions().require_auth().map(Self)
    }
}
