//! User domain type.

use chrono::{DateTime, Utc};

use brf_portal_core::{Email, Role, UserId};

/// A portal user (domain type).
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// User's role; only `Admin` may edit content.
    pub role: Role,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}
