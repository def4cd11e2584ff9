//! Authentication errors.

use thiserror::Error;

use brf_portal_core::EmailError;

use crate::db::RepositoryError;

/// Errors that can occur during authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password is wrong. Deliberately indistinguishable cases.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Email format is invalid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password doesn't meet requirements.
    #[error("weak password: {0}")]
    WeakPassword(String),

    /// An account with this email already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Password hashing failed.
    #[error("password hash error: {0}")]
    PasswordHash(String),

    /// Database operation failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
