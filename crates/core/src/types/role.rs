//! User roles.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role assigned to a portal user.
///
/// Stored as lowercase text in the `users.role` column. Only `Admin` may
/// edit page content; everything else is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Ordinary resident account.
    #[default]
    Member,
    /// Board member with content-editing rights.
    Admin,
}

impl Role {
    /// Whether this role grants content-editing rights.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// The database representation of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(Self::Member),
            "admin" => Ok(Self::Admin),
            other => Err(ParseRoleError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_admin_grants_editing() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Member.is_admin());
    }

    #[test]
    fn parses_database_values() {
        assert_eq!("admin".parse::<Role>().expect("admin"), Role::Admin);
        assert_eq!("member".parse::<Role>().expect("member"), Role::Member);
    }

    #[test]
    fn unknown_values_are_rejected_not_admin() {
        // A mistyped or legacy role value must never grant admin rights.
        assert!("administrator".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn round_trips_through_as_str() {
        for role in [Role::Member, Role::Admin] {
            assert_eq!(role.as_str().parse::<Role>().expect("round trip"), role);
        }
    }
}
