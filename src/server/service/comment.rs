//! Comment service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, review::ReviewRepository},
    error::AppError,
    model::comment::{Comment, CreateCommentParams},
};

/// Service providing business logic for review comments.
pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    /// Creates a new CommentService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the comments on a review, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments on the review, empty if it has none
    /// - `Err(AppError::NotFound)` - No review with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_review_id(&self, review_id: i32) -> Result<Vec<Comment>, AppError> {
        ReviewRepository::new(self.db)
            .assert_exists(review_id)
            .await?;

        let comments = CommentRepository::new(self.db)
            .get_by_review_id(review_id)
            .await?;

        Ok(comments)
    }

    /// Creates a comment on a review.
    ///
    /// The review is looked up first so a missing review is reported as not found with its
    /// id regardless of whether the store names the violated foreign key. An unknown author
    /// is left to the author foreign key.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(AppError::NotFound)` - No review with that id
    /// - `Err(AppError::DbErr)` - Foreign key violation or other database error
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        ReviewRepository::new(self.db)
            .assert_exists(params.review_id)
            .await?;

        let comment = CommentRepository::new(self.db).create(params).await?;

        Ok(comment)
    }
}
