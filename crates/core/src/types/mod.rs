//! Core types for the BRF portal.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod page_kind;
pub mod role;
pub mod slug;

pub use email::{Email, EmailError};
pub use id::*;
pub use page_kind::PageKind;
pub use role::Role;
pub use slug::slugify;
