//! Comment factory for creating test comment rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let comment = CommentFactory::new(&db, review.review_id, "bainesface")
///     .body("I loved this game too!")
///     .votes(16)
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    review_id: i32,
    author: String,
    body: String,
    votes: i32,
    created_at: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - body: `"Comment {id}"` where id is auto-incremented
    /// - votes: `0`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, review_id: i32, author: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            review_id,
            author: author.into(),
            body: format!("Comment {}", id),
            votes: 0,
            created_at: Utc::now(),
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the comment row.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - Created comment with its generated `comment_id`
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            comment_id: ActiveValue::NotSet,
            review_id: ActiveValue::Set(self.review_id),
            author: ActiveValue::Set(self.author),
            body: ActiveValue::Set(self.body),
            votes: ActiveValue::Set(self.votes),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values on the given review.
///
/// Shorthand for `CommentFactory::new(db, review_id, author).build().await`.
pub async fn create_comment(
    db: &DatabaseConnection,
    review_id: i32,
    author: impl Into<String>,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, review_id, author).build().await
}
