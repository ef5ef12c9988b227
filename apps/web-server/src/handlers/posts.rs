//! Post detail, comment submission, and the admin-only post management.

use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::Utc;

use scribe_core::domain::{NewComment, NewPost, Post};
use scribe_shared::{CommentForm, PostForm};

use super::{render, see_other};
use crate::error::{AppError, AppResult};
use crate::identity::{AdminIdentity, OptionalIdentity};
use crate::session;
use crate::state::AppState;
use crate::views::{MakePostPage, PageContext, PostPage};

/// Render the detail page for a post, with its comments and the comment form.
async fn post_page(
    state: &AppState,
    id: i32,
    ctx: PageContext,
    form: CommentForm,
    errors: Vec<String>,
) -> AppResult<HttpResponse> {
    let (post, author) = state
        .posts
        .find_with_author(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No post with id {id}")))?;

    let comments = state
        .comments
        .find_for_post_with_authors(id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    render(PostPage {
        ctx,
        post: (post, author).into(),
        comments,
        form,
        errors,
    })
}

/// GET /post/{id}
pub async fn show_post(
    state: web::Data<AppState>,
    session: Session,
    identity: OptionalIdentity,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let ctx = PageContext::build(identity.0, &session);

    post_page(&state, id, ctx, CommentForm::default(), Vec::new()).await
}

/// POST /post/{id} - comment submission.
pub async fn submit_comment(
    state: web::Data<AppState>,
    session: Session,
    identity: OptionalIdentity,
    path: web::Path<i32>,
    body: web::Form<CommentForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    // Checked before anything touches the database: an anonymous submission
    // must not create a row.
    let Some(user) = identity.0 else {
        session::flash(&session, "You need to log in or register to comment.");
        return Ok(see_other("/login"));
    };

    let mut form = body.into_inner();
    let errors = form.validate();
    if !errors.is_empty() {
        let ctx = PageContext::build(Some(user), &session);
        return post_page(&state, id, ctx, form, errors).await;
    }

    state
        .comments
        .create(NewComment {
            author_id: user.user_id,
            post_id: id,
            body: form.body,
        })
        .await?;

    Ok(see_other(&format!("/post/{id}")))
}

/// GET /new-post (admin)
pub async fn new_post_form(
    session: Session,
    admin: AdminIdentity,
) -> AppResult<HttpResponse> {
    render(MakePostPage {
        ctx: PageContext::build(Some(admin.0), &session),
        heading: "New Post".to_string(),
        action: "/new-post".to_string(),
        form: PostForm::default(),
        errors: Vec::new(),
    })
}

/// POST /new-post (admin)
pub async fn create_post(
    state: web::Data<AppState>,
    session: Session,
    admin: AdminIdentity,
    body: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let mut form = body.into_inner();

    let errors = form.validate();
    if !errors.is_empty() {
        return render(MakePostPage {
            ctx: PageContext::build(Some(admin.0), &session),
            heading: "New Post".to_string(),
            action: "/new-post".to_string(),
            form,
            errors,
        });
    }

    state
        .posts
        .create(NewPost {
            author_id: admin.0.user_id,
            title: form.title,
            subtitle: form.subtitle,
            body: form.body,
            img_url: form.img_url,
            published_on: Utc::now().date_naive(),
        })
        .await?;

    Ok(see_other("/"))
}

/// GET /edit-post/{id} (admin)
pub async fn edit_post_form(
    state: web::Data<AppState>,
    session: Session,
    admin: AdminIdentity,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No post with id {id}")))?;

    render(MakePostPage {
        ctx: PageContext::build(Some(admin.0), &session),
        heading: "Edit Post".to_string(),
        action: format!("/edit-post/{id}"),
        form: PostForm {
            title: post.title,
            subtitle: post.subtitle,
            img_url: post.img_url,
            body: post.body,
        },
        errors: Vec::new(),
    })
}

/// POST /edit-post/{id} (admin) - full-field replacement.
pub async fn update_post(
    state: web::Data<AppState>,
    session: Session,
    admin: AdminIdentity,
    path: web::Path<i32>,
    body: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let mut form = body.into_inner();

    let errors = form.validate();
    if !errors.is_empty() {
        return render(MakePostPage {
            ctx: PageContext::build(Some(admin.0), &session),
            heading: "Edit Post".to_string(),
            action: format!("/edit-post/{id}"),
            form,
            errors,
        });
    }

    let existing = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No post with id {id}")))?;

    state
        .posts
        .update(Post {
            id,
            author_id: existing.author_id,
            title: form.title,
            subtitle: form.subtitle,
            body: form.body,
            img_url: form.img_url,
            published_on: existing.published_on,
        })
        .await?;

    Ok(see_other(&format!("/post/{id}")))
}

/// GET /delete/{id} (admin)
pub async fn delete_post(
    state: web::Data<AppState>,
    _admin: AdminIdentity,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await?;
    tracing::info!(post_id = id, "Post deleted");

    Ok(see_other("/"))
}
