//! Authentication middleware and extractors.
//!
//! Provides extractors for reading the logged-in user and gating the
//! content-editing routes on the admin role.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentUser, session_keys};

/// Extractor that optionally gets the current user.
///
/// Does not reject the request if nobody is logged in.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(
///     OptionalUser(user): OptionalUser,
/// ) -> impl IntoResponse {
///     let is_admin = user.is_some_and(|u| u.is_admin());
///     // ...
/// }
/// ```
pub struct OptionalUser(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // A missing session, a missing key, and a failed deserialize all
        // collapse to "not logged in" - never to admin.
        let user = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentUser>(session_keys::CURRENT_USER)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(user))
    }
}

/// Extractor that requires a logged-in user with the admin role.
///
/// If nobody is logged in, redirects to the login page. If the user is
/// logged in but not an admin, returns 403 Forbidden.
///
/// # Example
///
/// ```rust,ignore
/// async fn edit_handler(
///     RequireAdmin(admin): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.email)
/// }
/// ```
pub struct RequireAdmin(pub CurrentUser);

/// Error returned when admin rights are required.
pub enum AdminRejection {
    /// Redirect to login page (nobody logged in).
    RedirectToLogin,
    /// Session exists but could not be read.
    Unauthorized,
    /// Logged in, but not an admin.
    Forbidden,
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "Endast administratörer kan redigera innehåll",
            )
                .into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminRejection::Unauthorized)?;

        // Get the current user from the session
        let user: CurrentUser = session
            .get(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten()
            .ok_or(AdminRejection::RedirectToLogin)?;

        // Check for the admin role
        if !user.is_admin() {
            return Err(AdminRejection::Forbidden);
        }

        Ok(Self(user))
    }
}

/// Helper to set the current user in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to clear the current user from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentUser>(session_keys::CURRENT_USER)
        .await?;
    Ok(())
}
