//! SeaORM entities mirroring the blog schema.

pub mod comment;
pub mod post;
pub mod user;
