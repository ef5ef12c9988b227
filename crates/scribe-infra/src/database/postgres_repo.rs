//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use scribe_core::domain::{Comment, NewComment, NewPost, NewUser, Post, User};
use scribe_core::error::RepoError;
use scribe_core::ports::{CommentRepository, PostRepository, UserRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, constraint_or_query};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(new_user)
            .insert(&*self.db)
            .await
            .map_err(constraint_or_query)?;

        Ok(model.into())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all_with_authors(&self) -> Result<Vec<(Post, User)>, RepoError> {
        let rows = PostEntity::find()
            .find_also_related(UserEntity)
            .order_by_asc(post::Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        rows.into_iter()
            .map(|(post, author)| {
                let author =
                    author.ok_or_else(|| RepoError::Query("post without author row".to_string()))?;
                Ok((post.into(), author.into()))
            })
            .collect()
    }

    async fn find_with_author(&self, id: i32) -> Result<Option<(Post, User)>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&*self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        match row {
            Some((post, Some(author))) => Ok(Some((post.into(), author.into()))),
            Some((_, None)) => Err(RepoError::Query("post without author row".to_string())),
            None => Ok(None),
        }
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(new_post)
            .insert(&*self.db)
            .await
            .map_err(constraint_or_query)?;

        Ok(model.into())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(post)
            .update(&*self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => RepoError::NotFound,
                e => constraint_or_query(e),
            })?;

        Ok(model.into())
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_for_post_with_authors(
        &self,
        post_id: i32,
    ) -> Result<Vec<(Comment, User)>, RepoError> {
        let rows = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .find_also_related(UserEntity)
            .order_by_asc(comment::Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        rows.into_iter()
            .map(|(comment, author)| {
                let author = author
                    .ok_or_else(|| RepoError::Query("comment without author row".to_string()))?;
                Ok((comment.into(), author.into()))
            })
            .collect()
    }

    async fn create(&self, new_comment: NewComment) -> Result<Comment, RepoError> {
        let model = comment::ActiveModel::from(new_comment)
            .insert(&*self.db)
            .await
            .map_err(constraint_or_query)?;

        Ok(model.into())
    }
}
