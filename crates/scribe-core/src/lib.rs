//! # Scribe Core
//!
//! The domain layer of the Scribe blog.
//! This crate contains pure business types with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;

/// The user id granted elevated route access (post creation, editing,
/// deletion). The first registered account becomes the administrator.
pub const ADMIN_USER_ID: i32 = 1;
