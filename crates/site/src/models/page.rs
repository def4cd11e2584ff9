//! Page domain type.

use chrono::{DateTime, Utc};

use brf_portal_core::{PageId, PageKind};

/// A content page (domain type).
///
/// Content is admin-authored HTML, injected verbatim into the rendered
/// document. It may be empty, in which case the section body renders empty.
#[derive(Debug, Clone)]
pub struct Page {
    /// Unique page ID.
    pub id: PageId,
    /// Display title; also the navigation label and the sort key.
    pub title: String,
    /// URL-safe slug, unique within the table.
    pub slug: String,
    /// HTML body. May be empty.
    pub content: String,
    /// Decides which extra widgets render inside the section.
    pub kind: PageKind,
    /// When the page was created.
    pub created_at: DateTime<Utc>,
    /// When the content was last saved.
    pub updated_at: DateTime<Utc>,
}
