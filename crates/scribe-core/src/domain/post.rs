use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Post entity - a published blog article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    pub subtitle: String,
    /// Rich HTML produced by the editor; rendered unescaped.
    pub body: String,
    pub img_url: String,
    pub published_on: NaiveDate,
}

/// A post that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub author_id: i32,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub img_url: String,
    pub published_on: NaiveDate,
}
