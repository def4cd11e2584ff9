//! CLI command implementations.

pub mod admin;
pub mod migrate;
pub mod seed;

/// Resolve the database URL from the environment.
///
/// Checks `PORTAL_DATABASE_URL` first, then `DATABASE_URL`, matching the
/// site's configuration.
pub fn database_url() -> Result<String, MissingEnvVar> {
    std::env::var("PORTAL_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| MissingEnvVar("PORTAL_DATABASE_URL"))
}

/// Required environment variable is missing.
#[derive(Debug, thiserror::Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVar(pub &'static str);
