use async_trait::async_trait;

use crate::domain::{Comment, NewComment, NewPost, NewUser, Post, User};
use crate::error::RepoError;

/// Generic repository trait defining the operations every entity supports.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Insert a new user and return it with its database-assigned id.
    async fn create(&self, new_user: NewUser) -> Result<User, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// All posts in publication order, each with its author.
    async fn find_all_with_authors(&self) -> Result<Vec<(Post, User)>, RepoError>;

    /// A single post with its author.
    async fn find_with_author(&self, id: i32) -> Result<Option<(Post, User)>, RepoError>;

    /// Insert a new post and return it with its database-assigned id.
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError>;

    /// Overwrite every stored field of an existing post.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, i32> {
    /// Comments on a post in the order they were left, each with its author.
    async fn find_for_post_with_authors(
        &self,
        post_id: i32,
    ) -> Result<Vec<(Comment, User)>, RepoError>;

    /// Insert a new comment and return it with its database-assigned id.
    async fn create(&self, new_comment: NewComment) -> Result<Comment, RepoError>;
}
