//! HTTP handlers and route configuration.

mod auth;
mod pages;
mod posts;

use actix_web::{HttpResponse, http::header, http::header::ContentType, web};
use askama::Template;

use crate::error::AppResult;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/", web::get().to(pages::index))
        .route("/about", web::get().to(pages::about))
        .route("/contact", web::get().to(pages::contact))
        .route("/post/{id}", web::get().to(posts::show_post))
        .route("/post/{id}", web::post().to(posts::submit_comment))
        // Auth routes
        .route("/register", web::get().to(auth::register_form))
        .route("/register", web::post().to(auth::register))
        .route("/login", web::get().to(auth::login_form))
        .route("/login", web::post().to(auth::login))
        .route("/logout", web::get().to(auth::logout))
        // Admin routes
        .route("/new-post", web::get().to(posts::new_post_form))
        .route("/new-post", web::post().to(posts::create_post))
        .route("/edit-post/{id}", web::get().to(posts::edit_post_form))
        .route("/edit-post/{id}", web::post().to(posts::update_post))
        .route("/delete/{id}", web::get().to(posts::delete_post));
}

/// Render a template into a 200 HTML response.
pub(crate) fn render(page: impl Template) -> AppResult<HttpResponse> {
    let body = page.render()?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

/// Redirect-after-POST response; also used to bounce guests to the login page.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[cfg(test)]
mod tests;
