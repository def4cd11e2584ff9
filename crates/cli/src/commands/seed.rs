//! Content seeding command.
//!
//! Inserts the association's standard pages so a fresh install has something
//! to show. Existing pages (matched by slug) are left untouched, so the
//! command is safe to re-run.
//!
//! # Usage
//!
//! ```bash
//! brf-cli seed
//! ```

use sqlx::PgPool;
use thiserror::Error;

use brf_portal_core::{PageKind, slugify};

use super::{MissingEnvVar, database_url};

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Required environment variable is missing.
    #[error(transparent)]
    MissingEnvVar(#[from] MissingEnvVar),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The standard pages and their starter content.
const SEED_PAGES: &[(&str, &str)] = &[
    (
        "Föreningen",
        "<p>BRF Sjöutsikten är en bostadsrättsförening med 48 lägenheter. \
         Här hittar du information om föreningen och styrelsen.</p>",
    ),
    (
        "Gästlägenhet",
        "<p>Föreningens gästlägenhet ligger på bottenvåningen i hus B och \
         kan bokas av alla medlemmar.</p>",
    ),
    (
        "Tvättstuga",
        "<p>Tvättstugan bokas med bokningscylinder på tavlan utanför. \
         Tvättpass är tre timmar.</p>",
    ),
    (
        "Sopsortering",
        "<p>Miljörummet finns vid garageinfarten. Sortera enligt \
         anvisningarna på kärlen.</p>",
    ),
];

/// Insert the standard pages if missing.
///
/// The guest apartment page gets its kind from the legacy title mapping, so
/// the booking widget renders for it.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = database_url()?;

    tracing::info!("Connecting to portal database...");
    let pool = PgPool::connect(&database_url).await?;

    for (title, content) in SEED_PAGES {
        let slug = slugify(title);
        let kind = PageKind::infer_from_title(title);

        let result = sqlx::query(
            r"
            INSERT INTO pages (title, slug, content, kind)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (slug) DO NOTHING
            ",
        )
        .bind(title)
        .bind(&slug)
        .bind(content)
        .bind(kind.as_str())
        .execute(&pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::info!("Page '{}' already exists, skipping", title);
        } else {
            tracing::info!("Created page '{}' ({})", title, kind);
        }
    }

    tracing::info!("Seeding complete!");
    Ok(())
}
