//! Authentication route handlers.
//!
//! Password login against the local user table. There is no registration
//! surface; the board creates accounts through the CLI.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::AuthService;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    LoginTemplate { error: query.error }
}

/// Handle login form submission.
///
/// The role is captured into the session here; a role change takes effect
/// on the next login.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let auth = AuthService::new(state.pool());

    match auth.login_with_password(&form.email, &form.password).await {
        Ok(user) => {
            let current_user = CurrentUser {
                id: user.id,
                email: user.email,
                role: user.role,
            };

            if let Err(e) = set_current_user(&session, &current_user).await {
                tracing::error!(error = %e, "Failed to set session");
                return Redirect::to("/auth/login?error=session").into_response();
            }

            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Login failed");
            Redirect::to("/auth/login?error=credentials").into_response()
        }
    }
}

/// Handle logout.
///
/// Clears the session and redirects to the home page.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!(error = %e, "Failed to clear session");
    }

    // Also destroy the entire session
    if let Err(e) = session.flush().await {
        tracing::error!(error = %e, "Failed to flush session");
    }

    Redirect::to("/").into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn login_page_renders_the_form() {
        let html = LoginTemplate { error: None }.render().unwrap();

        assert!(html.contains("action=\"/auth/login\""));
        assert!(html.contains("name=\"email\""));
        assert!(html.contains("name=\"password\""));
        assert!(!html.contains("Fel e-post"));
    }

    #[test]
    fn credentials_error_shows_a_swedish_message() {
        let html = LoginTemplate {
            error: Some("credentials".to_owned()),
        }
        .render()
        .unwrap();

        assert!(html.contains("Fel e-post eller lösenord"));
    }
}
