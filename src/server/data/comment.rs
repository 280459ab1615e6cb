//! Comment data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, CreateCommentParams};

/// Repository providing database operations for review comments.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    /// Creates a new CommentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all comments on a review, newest first.
    ///
    /// Does not check that the review exists; an unknown id yields an empty list.
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments on the review
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_review_id(&self, review_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ReviewId.eq(review_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::CommentId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Inserts a comment with zero votes, stamped with the current time.
    ///
    /// A single `INSERT ... RETURNING` statement. Unknown review ids or authors are rejected
    /// by the store's foreign keys.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment with its assigned id
    /// - `Err(DbErr)` - Foreign key violation or other database error
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            comment_id: ActiveValue::NotSet,
            review_id: ActiveValue::Set(params.review_id),
            author: ActiveValue::Set(params.author),
            body: ActiveValue::Set(params.body),
            votes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }
}
