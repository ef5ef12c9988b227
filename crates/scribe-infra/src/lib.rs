//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`:
//! SeaORM entities and PostgreSQL repositories, plus Argon2 password hashing.

pub mod auth;
pub mod database;

pub use auth::Argon2PasswordService;
pub use database::{
    DatabaseConfig, PostgresCommentRepository, PostgresPostRepository, PostgresUserRepository,
    connect,
};
