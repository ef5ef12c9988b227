//! Session state helpers: the login cookie and one-time flash messages.

use actix_session::{Session, SessionInsertError};

use scribe_core::domain::User;

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const USER_NAME_KEY: &str = "user_name";
pub(crate) const USER_EMAIL_KEY: &str = "user_email";

const FLASH_KEY: &str = "_flashes";

/// Establish a logged-in session for the user.
pub fn login(session: &Session, user: &User) -> Result<(), SessionInsertError> {
    session.insert(USER_ID_KEY, user.id)?;
    session.insert(USER_NAME_KEY, user.name.clone())?;
    session.insert(USER_EMAIL_KEY, user.email.clone())?;
    Ok(())
}

/// Drop all session state, logged in or not.
pub fn logout(session: &Session) {
    session.purge();
}

/// Queue a one-time notice for the next rendered page.
pub fn flash(session: &Session, message: &str) {
    let mut messages = session
        .get::<Vec<String>>(FLASH_KEY)
        .ok()
        .flatten()
        .unwrap_or_default();
    messages.push(message.to_string());

    if let Err(e) = session.insert(FLASH_KEY, messages) {
        tracing::warn!("Failed to store flash message: {}", e);
    }
}

/// Drain the queued flash messages; rendering a page consumes them.
pub fn take_flashes(session: &Session) -> Vec<String> {
    let messages = session
        .get::<Vec<String>>(FLASH_KEY)
        .ok()
        .flatten()
        .unwrap_or_default();
    session.remove(FLASH_KEY);
    messages
}
