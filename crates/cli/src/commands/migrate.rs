//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! brf-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `PORTAL_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string

use sqlx::PgPool;
use thiserror::Error;

use super::{MissingEnvVar, database_url};

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Required environment variable is missing.
    #[error(transparent)]
    MissingEnvVar(#[from] MissingEnvVar),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run the portal database migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = database_url()?;

    tracing::info!("Connecting to portal database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../site/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
