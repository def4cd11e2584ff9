//! Services for the site.

pub mod auth;

pub use auth::AuthService;
