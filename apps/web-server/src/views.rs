//! Askama templates and the view models they render.

use actix_session::Session;
use askama::Template;
use chrono::NaiveDate;

use scribe_core::domain::{Comment, Post, User};
use scribe_shared::{CommentForm, LoginForm, PostForm, RegisterForm};

use crate::gravatar;
use crate::identity::Identity;
use crate::session;

/// State every page shares: the logged-in user (for the nav bar) and the
/// flash messages drained from the session.
pub struct PageContext {
    pub user: Option<Identity>,
    pub flashes: Vec<String>,
}

impl PageContext {
    pub fn build(user: Option<Identity>, session: &Session) -> Self {
        Self {
            user,
            flashes: session::take_flashes(session),
        }
    }
}

fn long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// A post row on the listing page.
pub struct PostSummary {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub published_on: String,
}

impl From<(Post, User)> for PostSummary {
    fn from((post, author): (Post, User)) -> Self {
        Self {
            id: post.id,
            title: post.title,
            subtitle: post.subtitle,
            author: author.name,
            published_on: long_date(post.published_on),
        }
    }
}

/// The full post on the detail page.
pub struct PostDetail {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub img_url: String,
    pub author: String,
    pub published_on: String,
}

impl From<(Post, User)> for PostDetail {
    fn from((post, author): (Post, User)) -> Self {
        Self {
            id: post.id,
            title: post.title,
            subtitle: post.subtitle,
            body: post.body,
            img_url: post.img_url,
            author: author.name,
            published_on: long_date(post.published_on),
        }
    }
}

/// A rendered comment with its author's name and avatar.
pub struct CommentView {
    pub author: String,
    pub avatar_url: String,
    pub body: String,
}

impl From<(Comment, User)> for CommentView {
    fn from((comment, author): (Comment, User)) -> Self {
        Self {
            avatar_url: gravatar::gravatar_url(&author.email),
            author: author.name,
            body: comment.body,
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub ctx: PageContext,
    pub posts: Vec<PostSummary>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub ctx: PageContext,
    pub form: RegisterForm,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub ctx: PageContext,
    pub form: LoginForm,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostPage {
    pub ctx: PageContext,
    pub post: PostDetail,
    pub comments: Vec<CommentView>,
    pub form: CommentForm,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "make_post.html")]
pub struct MakePostPage {
    pub ctx: PageContext,
    pub heading: String,
    pub action: String,
    pub form: PostForm,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage {
    pub ctx: PageContext,
}

/// Standalone error page; carries no session context.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_in_long_form() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        assert_eq!(long_date(date), "August 29, 2026");
    }
}
