//! Read-only pages: the post listing and the static pages.

use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::render;
use crate::error::AppResult;
use crate::identity::OptionalIdentity;
use crate::state::AppState;
use crate::views::{AboutPage, ContactPage, IndexPage, PageContext};

/// GET /
pub async fn index(
    state: web::Data<AppState>,
    session: Session,
    identity: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .find_all_with_authors()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    render(IndexPage {
        ctx: PageContext::build(identity.0, &session),
        posts,
    })
}

/// GET /about
pub async fn about(session: Session, identity: OptionalIdentity) -> AppResult<HttpResponse> {
    render(AboutPage {
        ctx: PageContext::build(identity.0, &session),
    })
}

/// GET /contact
pub async fn contact(session: Session, identity: OptionalIdentity) -> AppResult<HttpResponse> {
    render(ContactPage {
        ctx: PageContext::build(identity.0, &session),
    })
}
