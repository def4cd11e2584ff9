//! Domain types for the site.
//!
//! These types represent validated domain objects separate from database row types.

pub mod page;
pub mod session;
pub mod user;

pub use page::Page;
pub use session::{CurrentUser, session_keys};
pub use user::User;
