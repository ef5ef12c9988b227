//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub author_id: i32,
    #[sea_orm(unique)]
    pub title: String,
    pub subtitle: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub img_url: String,
    pub published_on: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Author,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for scribe_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            subtitle: model.subtitle,
            body: model.body,
            img_url: model.img_url,
            published_on: model.published_on,
        }
    }
}

impl From<scribe_core::domain::NewPost> for ActiveModel {
    fn from(post: scribe_core::domain::NewPost) -> Self {
        Self {
            id: sea_orm::ActiveValue::NotSet,
            author_id: Set(post.author_id),
            title: Set(post.title),
            subtitle: Set(post.subtitle),
            body: Set(post.body),
            img_url: Set(post.img_url),
            published_on: Set(post.published_on),
        }
    }
}

/// Full-field replacement for edits; every column is marked set.
impl From<scribe_core::domain::Post> for ActiveModel {
    fn from(post: scribe_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            author_id: Set(post.author_id),
            title: Set(post.title),
            subtitle: Set(post.subtitle),
            body: Set(post.body),
            img_url: Set(post.img_url),
            published_on: Set(post.published_on),
        }
    }
}
