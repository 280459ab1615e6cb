//! Review data repository for database operations.
//!
//! Reads select every review column together with a `comment_count` aggregate computed by
//! left-joining comments and grouping by review id, so reviews without comments report `0`.
//! The vote increment is a single `UPDATE ... SET votes = votes + $1 ... RETURNING *`
//! evaluated by the store, which keeps concurrent increments from losing updates. The same
//! statement refuses any increment that would leave the `i32` range of the column.

use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::{
    error::{AppError, INVALID_INPUT},
    model::review::{
        GetReviewsParams, IncrementVotesParams, Review, ReviewWithCommentCount,
        ReviewWithCommentCountRow,
    },
};

const COMMENT_COUNT: &str = "comment_count";

/// Repository providing database operations for reviews.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    /// Creates a new ReviewRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn select_with_comment_count() -> Select<entity::review::Entity> {
        entity::prelude::Review::find()
            .column_as(entity::comment::Column::CommentId.count(), COMMENT_COUNT)
            .join(JoinType::LeftJoin, entity::review::Relation::Comment.def())
            .group_by(entity::review::Column::ReviewId)
    }

    /// Gets a review by id together with its comment count.
    ///
    /// # Arguments
    /// - `review_id` - Id of the review to fetch
    ///
    /// # Returns
    /// - `Ok(ReviewWithCommentCount)` - The review and number of comments on it
    /// - `Err(AppError::NotFound)` - No review with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, review_id: i32) -> Result<ReviewWithCommentCount, AppError> {
        let row = Self::select_with_comment_count()
            .filter(entity::review::Column::ReviewId.eq(review_id))
            .into_model::<ReviewWithCommentCountRow>()
            .one(self.db)
            .await?;

        row.map(ReviewWithCommentCount::from_row)
            .ok_or_else(|| review_not_found(review_id))
    }

    /// Gets all reviews with their comment counts, optionally filtered by category.
    ///
    /// Results are ordered by the requested column and direction, ties broken by ascending
    /// review id so the listing is deterministic.
    ///
    /// # Arguments
    /// - `params` - Validated sort column, direction and optional category slug
    ///
    /// # Returns
    /// - `Ok(Vec<ReviewWithCommentCount>)` - Matching reviews (empty if none match)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(
        &self,
        params: &GetReviewsParams,
    ) -> Result<Vec<ReviewWithCommentCount>, DbErr> {
        let mut query = Self::select_with_comment_count();

        if let Some(ref category) = params.category {
            query = query.filter(entity::review::Column::Category.eq(category.as_str()));
        }

        let order = params.order.into_order();
        query = match params.sort_by.column() {
            Some(column) => query.order_by(column, order),
            None => query.order_by(Expr::col(Alias::new(COMMENT_COUNT)), order),
        };

        let rows = query
            .order_by_asc(entity::review::Column::ReviewId)
            .into_model::<ReviewWithCommentCountRow>()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(ReviewWithCommentCount::from_row).collect())
    }

    /// Atomically adds `inc_votes` to a review's votes and returns the updated row.
    ///
    /// # Arguments
    /// - `params` - Review id and signed increment
    ///
    /// # Returns
    /// - `Ok(Review)` - The review after the increment
    /// - `Err(AppError::NotFound)` - No review with that id, nothing was written
    /// - `Err(AppError::BadRequest)` - The new tally would overflow, nothing was written
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn increment_votes(&self, params: IncrementVotesParams) -> Result<Review, AppError> {
        let new_votes = Expr::col(entity::review::Column::Votes).add(params.inc_votes);

        let updated = entity::prelude::Review::update_many()
            .col_expr(entity::review::Column::Votes, new_votes.clone())
            .filter(entity::review::Column::ReviewId.eq(params.review_id))
            .filter(new_votes.between(i32::MIN, i32::MAX))
            .exec_with_returning(self.db)
            .await?;

        if let Some(review) = updated.into_iter().next() {
            return Ok(Review::from_entity(review));
        }

        self.assert_exists(params.review_id).await?;

        Err(AppError::BadRequest(INVALID_INPUT.to_string()))
    }

    /// Fails with `NotFound` unless a review with the given id exists.
    ///
    /// # Returns
    /// - `Ok(())` - Review exists
    /// - `Err(AppError::NotFound)` - No review with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn assert_exists(&self, review_id: i32) -> Result<(), AppError> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::ReviewId.eq(review_id))
            .count(self.db)
            .await?;

        if count == 0 {
            return Err(review_not_found(review_id));
        }

        Ok(())
    }
}

fn review_not_found(review_id: i32) -> AppError {
    AppError::NotFound(format!("Review not found for id {}", review_id))
}
