//! # Scribe Shared
//!
//! Form types shared between the request handlers and the templates.

pub mod forms;

pub use forms::{CommentForm, LoginForm, PostForm, RegisterForm};
