//! Page repository for database operations.
//!
//! Rows are fetched into a raw row struct and parsed into the domain type,
//! so an invalid `kind` value surfaces as `DataCorruption` instead of
//! leaking into templates.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use brf_portal_core::{PageId, PageKind};

use super::RepositoryError;
use crate::models::page::Page;

/// Raw database row for a page.
#[derive(sqlx::FromRow)]
struct PageRow {
    id: i32,
    title: String,
    slug: String,
    content: String,
    kind: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PageRow> for Page {
    type Error = RepositoryError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        let kind: PageKind = row.kind.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid page kind in database: {e}"))
        })?;

        Ok(Self {
            id: PageId::new(row.id),
            title: row.title,
            slug: row.slug,
            content: row.content,
            kind,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for page database operations.
pub struct PageRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PageRepository<'a> {
    /// Create a new page repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get all pages ordered by title (ascending, lexical).
    ///
    /// This is the order the navigation and sections render in; the first
    /// page in the result is the initially active section.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row has an invalid kind.
    pub async fn list(&self) -> Result<Vec<Page>, RepositoryError> {
        let rows: Vec<PageRow> = sqlx::query_as(
            r"
            SELECT id, title, slug, content, kind, created_at, updated_at
            FROM pages
            ORDER BY title ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Page::try_from).collect()
    }

    /// Get a page by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the row has an invalid kind.
    pub async fn get(&self, id: PageId) -> Result<Option<Page>, RepositoryError> {
        let row: Option<PageRow> = sqlx::query_as(
            r"
            SELECT id, title, slug, content, kind, created_at, updated_at
            FROM pages
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(Page::try_from).transpose()
    }

    /// Replace a page's content and bump its updated timestamp.
    ///
    /// Only the content and updated-timestamp columns change; filtered by
    /// identifier equality.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no page has this ID.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_content(
        &self,
        id: PageId,
        content: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE pages
            SET content = $1, updated_at = $2
            WHERE id = $3
            ",
        )
        .bind(content)
        .bind(updated_at)
        .bind(id.as_i32())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
