//! Registration, login, and logout handlers.

use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::Utc;

use scribe_core::domain::NewUser;
use scribe_core::error::RepoError;
use scribe_shared::{LoginForm, RegisterForm};

use super::{render, see_other};
use crate::error::AppResult;
use crate::identity::OptionalIdentity;
use crate::session;
use crate::state::AppState;
use crate::views::{LoginPage, PageContext, RegisterPage};

/// GET /register
pub async fn register_form(
    session: Session,
    identity: OptionalIdentity,
) -> AppResult<HttpResponse> {
    render(RegisterPage {
        ctx: PageContext::build(identity.0, &session),
        form: RegisterForm::default(),
        errors: Vec::new(),
    })
}

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    session: Session,
    identity: OptionalIdentity,
    body: web::Form<RegisterForm>,
) -> AppResult<HttpResponse> {
    let mut form = body.into_inner();

    let errors = form.validate();
    if !errors.is_empty() {
        return render(RegisterPage {
            ctx: PageContext::build(identity.0, &session),
            form,
            errors,
        });
    }

    // Duplicate emails go to the login page instead of a second record.
    if state.users.find_by_email(&form.email).await?.is_some() {
        session::flash(&session, "You're already signed up! Please log in instead.");
        return Ok(see_other("/login"));
    }

    let password_hash = state.passwords.hash(&form.password)?;

    let new_user = NewUser::new(form.email, password_hash, form.name, Utc::now().date_naive());

    // A concurrent registration can slip past the lookup above; the unique
    // index catches it, and the outcome reads the same as the ordinary
    // duplicate.
    let user = match state.users.create(new_user).await {
        Ok(user) => user,
        Err(RepoError::Constraint(_)) => {
            session::flash(&session, "You're already signed up! Please log in instead.");
            return Ok(see_other("/login"));
        }
        Err(e) => return Err(e.into()),
    };

    session::login(&session, &user)?;
    Ok(see_other("/"))
}

/// GET /login
pub async fn login_form(session: Session, identity: OptionalIdentity) -> AppResult<HttpResponse> {
    render(LoginPage {
        ctx: PageContext::build(identity.0, &session),
        form: LoginForm::default(),
        errors: Vec::new(),
    })
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    session: Session,
    identity: OptionalIdentity,
    body: web::Form<LoginForm>,
) -> AppResult<HttpResponse> {
    let mut form = body.into_inner();

    let errors = form.validate();
    if !errors.is_empty() {
        return render(LoginPage {
            ctx: PageContext::build(identity.0, &session),
            form,
            errors,
        });
    }

    let Some(user) = state.users.find_by_email(&form.email).await? else {
        session::flash(&session, "That email does not exist, please try again.");
        return Ok(see_other("/login"));
    };

    if !state.passwords.verify(&form.password, &user.password_hash)? {
        session::flash(&session, "Password incorrect, please try again.");
        return Ok(see_other("/login"));
    }

    session::login(&session, &user)?;
    Ok(see_other("/"))
}

/// GET /logout
pub async fn logout(session: Session) -> AppResult<HttpResponse> {
    session::logout(&session);
    Ok(see_other("/"))
}
