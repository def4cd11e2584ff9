//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Home page (all sections)
//! GET  /health            - Health check
//! GET  /health/ready      - Readiness check (database ping)
//!
//! # Content editing (admin only)
//! GET  /pages/{id}/edit   - Edit form for one page
//! POST /pages/{id}        - Save page content
//!
//! # Auth
//! GET  /auth/login        - Login page
//! POST /auth/login        - Login action
//! POST /auth/logout       - Logout action
//! ```

pub mod auth;
pub mod home;
pub mod pages;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page with all content sections
        .route("/", get(home::home))
        // Content editing
        .route("/pages/{id}/edit", get(pages::edit_page))
        .route("/pages/{id}", post(pages::save_page))
        // Auth routes
        .nest("/auth", auth_routes())
}
