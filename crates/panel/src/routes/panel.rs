//! Landing page shown after login.

use askama::Template;
use askama_web::WebTemplate;

use almacen_core::CurrentUser;

use super::pages::{Page, Section};
use crate::filters;

/// Panel page template.
#[derive(Template, WebTemplate)]
#[template(path = "panel.html")]
pub struct PanelTemplate {
    pub page: &'static str,
    pub user_label: Option<String>,
    pub alert: Option<String>,
    pub role: String,
}

/// Render the panel for `user`, showing `username (rol)`.
#[must_use]
pub fn page(user: &CurrentUser) -> PanelTemplate {
    PanelTemplate {
        page: Page::from(Section::Panel).id(),
        user_label: Some(user.to_string()),
        alert: None,
        role: user.role.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use almacen_core::Role;

    use super::*;

    #[test]
    fn test_panel_shows_user_and_role() {
        let user = CurrentUser {
            username: "empleado1".to_string(),
            role: Role::Empleado,
        };
        let html = page(&user).render().unwrap_or_default();

        assert!(html.contains(r#"data-page="panel""#));
        assert!(html.contains("empleado1 (Empleado)"));
        assert!(html.contains(r#"id="btn-logout""#));
    }
}
