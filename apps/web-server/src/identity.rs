//! Identity extractors over the session cookie.
//!
//! `OptionalIdentity` never fails and drives the navigation bar;
//! `AdminIdentity` is the guard on the post-management routes.

use std::future::{Ready, ready};

use actix_session::SessionExt;
use actix_web::http::header::ContentType;
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, http::StatusCode, http::header};
use askama::Template;

use scribe_core::ADMIN_USER_ID;

use crate::session;
use crate::views::ErrorPage;

/// The logged-in user as recorded in the session cookie.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.user_id == ADMIN_USER_ID
    }
}

fn identity_from_request(req: &HttpRequest) -> Option<Identity> {
    let session = req.get_session();
    let user_id = session.get::<i32>(session::USER_ID_KEY).ok().flatten()?;
    let name = session
        .get::<String>(session::USER_NAME_KEY)
        .ok()
        .flatten()?;
    let email = session
        .get::<String>(session::USER_EMAIL_KEY)
        .ok()
        .flatten()?;

    Some(Identity {
        user_id,
        name,
        email,
    })
}

/// Optional identity extractor - doesn't fail if not logged in.
pub struct OptionalIdentity(pub Option<Identity>);

impl FromRequest for OptionalIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(OptionalIdentity(identity_from_request(req))))
    }
}

/// Admin guard: requires a session whose user id equals `ADMIN_USER_ID`.
///
/// Unauthenticated requests are flashed and redirected to the login page;
/// authenticated non-admin requests get a 403.
pub struct AdminIdentity(pub Identity);

#[derive(Debug)]
pub enum AdminGuardError {
    LoginRequired,
    Forbidden,
}

impl std::fmt::Display for AdminGuardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminGuardError::LoginRequired => write!(f, "login required"),
            AdminGuardError::Forbidden => write!(f, "admin only"),
        }
    }
}

impl actix_web::ResponseError for AdminGuardError {
    fn status_code(&self) -> StatusCode {
        match self {
            AdminGuardError::LoginRequired => StatusCode::SEE_OTHER,
            AdminGuardError::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AdminGuardError::LoginRequired => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/login"))
                .finish(),
            AdminGuardError::Forbidden => {
                let page = ErrorPage {
                    status: 403,
                    message: "This page is only available to the admin.".to_string(),
                };
                match page.render() {
                    Ok(body) => HttpResponse::Forbidden()
                        .content_type(ContentType::html())
                        .body(body),
                    Err(_) => HttpResponse::Forbidden().finish(),
                }
            }
        }
    }
}

impl FromRequest for AdminIdentity {
    type Error = AdminGuardError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match identity_from_request(req) {
            None => {
                let session = req.get_session();
                session::flash(
                    &session,
                    "This page is only available to the admin. Please log in first.",
                );
                ready(Err(AdminGuardError::LoginRequired))
            }
            Some(identity) if !identity.is_admin() => ready(Err(AdminGuardError::Forbidden)),
            Some(identity) => ready(Ok(AdminIdentity(identity))),
        }
    }
}
