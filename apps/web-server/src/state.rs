//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::{CommentRepository, PasswordService, PostRepository, UserRepository};
use scribe_infra::{
    Argon2PasswordService, PostgresCommentRepository, PostgresPostRepository,
    PostgresUserRepository,
};
use sea_orm::DbConn;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// Build the application state over a live database connection. The
    /// repositories share the connection pool through one `Arc`.
    pub fn new(db: DbConn) -> Self {
        let db = Arc::new(db);
        Self {
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            comments: Arc::new(PostgresCommentRepository::new(db)),
            passwords: Arc::new(Argon2PasswordService::new()),
        }
    }
}
