use serde::{Deserialize, Serialize};

/// Comment entity - free text a user left on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub author_id: i32,
    pub post_id: i32,
    pub body: String,
}

/// A comment that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author_id: i32,
    pub post_id: i32,
    pub body: String,
}
