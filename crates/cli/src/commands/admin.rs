//! User account management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create an admin account (content-editing rights)
//! brf-cli admin create -e styrelsen@example.com -p "ett starkt lösenord" -r admin
//!
//! # Create a member account (read-only)
//! brf-cli admin create -e boende@example.com -p "ett starkt lösenord"
//! ```
//!
//! # Environment Variables
//!
//! - `PORTAL_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string

use sqlx::PgPool;
use thiserror::Error;

use brf_portal_core::Role;
use brf_portal_site::services::AuthService;
use brf_portal_site::services::auth::AuthError;

use super::{MissingEnvVar, database_url};

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error(transparent)]
    MissingEnvVar(#[from] MissingEnvVar),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Invalid role.
    #[error("Invalid role: {0}. Valid roles: member, admin")]
    InvalidRole(String),

    /// Account creation failed.
    #[error("Account creation failed: {0}")]
    Auth(#[from] AuthError),
}

/// Create a new user account.
///
/// # Arguments
///
/// * `email` - The account's email address
/// * `password` - Plain-text password, hashed before storage
/// * `role` - `member` or `admin`
///
/// # Errors
///
/// Returns an error if the role is unknown, the email or password is
/// invalid, or the email is already registered.
pub async fn create_user(email: &str, password: &str, role: &str) -> Result<i32, AdminError> {
    dotenvy::dotenv().ok();

    let role: Role = role
        .parse()
        .map_err(|_| AdminError::InvalidRole(role.to_owned()))?;

    let database_url = database_url()?;

    tracing::info!("Connecting to portal database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Creating account: {} ({})", email, role);

    let user = AuthService::new(&pool)
        .create_account(email, password, role)
        .await?;

    tracing::info!(
        "Account created! ID: {}, Email: {}, Role: {}",
        user.id,
        user.email,
        user.role
    );

    Ok(user.id.as_i32())
}
