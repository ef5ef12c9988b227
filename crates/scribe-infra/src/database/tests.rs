#[cfg(test)]
mod tests {
    use crate::database::entity::{post, user};
    use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};
    use chrono::NaiveDate;
    use scribe_core::domain::{Post, User};
    use scribe_core::error::RepoError;
    use scribe_core::ports::{BaseRepository, UserRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn joined_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    #[tokio::test]
    async fn find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post::Model {
                id: 7,
                author_id: 1,
                title: "Test Post".to_owned(),
                subtitle: "A subtitle".to_owned(),
                body: "<p>Content</p>".to_owned(),
                img_url: "https://example.com/header.jpg".to_owned(),
                published_on: joined_on(),
            }]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));

        let result: Option<Post> = repo.find_by_id(7).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, 7);
        assert_eq!(post.author_id, 1);
    }

    #[tokio::test]
    async fn find_user_by_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: 1,
                email: "admin@example.com".to_owned(),
                password_hash: "$argon2id$stub".to_owned(),
                name: "Admin".to_owned(),
                joined_on: joined_on(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(Arc::new(db));

        let user: Option<User> = repo.find_by_email("admin@example.com").await.unwrap();

        let user = user.unwrap();
        assert_eq!(user.id, 1);
        assert!(user.is_admin());
        assert_eq!(user.name, "Admin");
    }

    #[tokio::test]
    async fn find_user_by_email_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<user::Model>::new()])
            .into_connection();

        let repo = PostgresUserRepository::new(Arc::new(db));

        let user = repo.find_by_email("nobody@example.com").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));

        let result: Result<(), RepoError> = BaseRepository::<Post, i32>::delete(&repo, 42).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn delete_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));

        let result: Result<(), RepoError> = BaseRepository::<Post, i32>::delete(&repo, 7).await;
        assert!(result.is_ok());
    }
}
