//! Review service for business logic.
//!
//! Orchestrates review reads and vote updates. Listing by category first resolves the
//! category so an unknown slug is reported as not found instead of an empty list.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, review::ReviewRepository},
    error::AppError,
    model::review::{GetReviewsParams, IncrementVotesParams, Review, ReviewWithCommentCount},
};

/// Service providing business logic for reviews.
pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    /// Creates a new ReviewService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a review by id with its comment count.
    ///
    /// # Returns
    /// - `Ok(ReviewWithCommentCount)` - The review
    /// - `Err(AppError::NotFound)` - No review with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, review_id: i32) -> Result<ReviewWithCommentCount, AppError> {
        ReviewRepository::new(self.db).get_by_id(review_id).await
    }

    /// Retrieves reviews sorted and optionally filtered by category.
    ///
    /// # Arguments
    /// - `params` - Validated sort column, direction and optional category slug
    ///
    /// # Returns
    /// - `Ok(Vec<ReviewWithCommentCount>)` - Matching reviews, empty for a category without
    ///   reviews
    /// - `Err(AppError::NotFound)` - The category filter names a slug that does not exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(
        &self,
        params: GetReviewsParams,
    ) -> Result<Vec<ReviewWithCommentCount>, AppError> {
        if let Some(ref slug) = params.category {
            CategoryRepository::new(self.db).get_by_slug(slug).await?;
        }

        let reviews = ReviewRepository::new(self.db).get_all(&params).await?;

        Ok(reviews)
    }

    /// Adds a signed amount to a review's votes.
    ///
    /// # Returns
    /// - `Ok(Review)` - The updated review
    /// - `Err(AppError::NotFound)` - No review with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn increment_votes(&self, params: IncrementVotesParams) -> Result<Review, AppError> {
        ReviewRepository::new(self.db).increment_votes(params).await
    }
}
