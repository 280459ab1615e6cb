//! Review domain models and parameters.
//!
//! Provides the review domain model, the comment-count projection returned by review reads,
//! and the validated parameter types for listing reviews and incrementing votes.

use chrono::{DateTime, Utc};
use sea_orm::{FromQueryResult, Order};

use crate::{
    model::review::{ReviewDto, ReviewWithCommentCountDto, UpdateReviewVotesDto},
    server::error::AppError,
};

/// Board game review as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub review_id: i32,
    pub title: String,
    /// Slug of the category the reviewed game belongs to.
    pub category: String,
    pub designer: String,
    /// Username of the review's author.
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    /// Signed vote tally, may go negative.
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Converts an entity model to a review domain model at the repository boundary.
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            review_id: entity.review_id,
            title: entity.title,
            category: entity.category,
            designer: entity.designer,
            owner: entity.owner,
            review_body: entity.review_body,
            review_img_url: entity.review_img_url,
            votes: entity.votes,
            created_at: entity.created_at,
        }
    }

    /// Converts the review domain model to a DTO for API responses.
    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            review_id: self.review_id,
            title: self.title,
            category: self.category,
            designer: self.designer,
            owner: self.owner,
            review_body: self.review_body,
            review_img_url: self.review_img_url,
            votes: self.votes,
            created_at: self.created_at,
        }
    }
}

/// Raw row of the review read query: every review column plus the aggregated
/// `comment_count` from the left-joined comments.
#[derive(Debug, FromQueryResult)]
pub struct ReviewWithCommentCountRow {
    pub review_id: i32,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub comment_count: i64,
}

/// Review with the number of comments posted on it.
///
/// The count is computed at read time and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewWithCommentCount {
    pub review: Review,
    pub comment_count: i64,
}

impl ReviewWithCommentCount {
    /// Converts an aggregate query row at the repository boundary.
    pub fn from_row(row: ReviewWithCommentCountRow) -> Self {
        Self {
            review: Review {
                review_id: row.review_id,
                title: row.title,
                category: row.category,
                designer: row.designer,
                owner: row.owner,
                review_body: row.review_body,
                review_img_url: row.review_img_url,
                votes: row.votes,
                created_at: row.created_at,
            },
            comment_count: row.comment_count,
        }
    }

    /// Converts to a DTO for API responses; `comment_count` is serialized as a string.
    pub fn into_dto(self) -> ReviewWithCommentCountDto {
        ReviewWithCommentCountDto {
            review: self.review.into_dto(),
            comment_count: self.comment_count,
        }
    }
}

/// Column a review listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSortColumn {
    ReviewId,
    Title,
    Category,
    Designer,
    Owner,
    Votes,
    CreatedAt,
    /// Sorts by the derived comment count rather than a stored column.
    CommentCount,
}

impl ReviewSortColumn {
    /// Parses a `sort_by` query value. Names match the JSON field names exactly.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "review_id" => Some(Self::ReviewId),
            "title" => Some(Self::Title),
            "category" => Some(Self::Category),
            "designer" => Some(Self::Designer),
            "owner" => Some(Self::Owner),
            "votes" => Some(Self::Votes),
            "created_at" => Some(Self::CreatedAt),
            "comment_count" => Some(Self::CommentCount),
            _ => None,
        }
    }

    /// Stored column backing this sort key, `None` for the derived comment count.
    pub fn column(self) -> Option<entity::review::Column> {
        use entity::review::Column;

        match self {
            Self::ReviewId => Some(Column::ReviewId),
            Self::Title => Some(Column::Title),
            Self::Category => Some(Column::Category),
            Self::Designer => Some(Column::Designer),
            Self::Owner => Some(Column::Owner),
            Self::Votes => Some(Column::Votes),
            Self::CreatedAt => Some(Column::CreatedAt),
            Self::CommentCount => None,
        }
    }
}

/// Direction of a review listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses an `order` query value, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn into_order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}

/// Validated parameters for listing reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct GetReviewsParams {
    pub sort_by: ReviewSortColumn,
    pub order: SortOrder,
    /// Category slug to filter by, `None` lists every review.
    pub category: Option<String>,
}

impl GetReviewsParams {
    /// Builds listing parameters from raw query values.
    ///
    /// Missing values fall back to newest first (`created_at`, `desc`).
    ///
    /// # Returns
    /// - `Ok(GetReviewsParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - `sort_by` names an unknown column or `order` is not
    ///   `asc`/`desc`
    pub fn from_query(
        sort_by: Option<String>,
        order: Option<String>,
        category: Option<String>,
    ) -> Result<Self, AppError> {
        let sort_by = match sort_by {
            Some(value) => ReviewSortColumn::parse(&value)
                .ok_or_else(|| AppError::BadRequest("Invalid sort_by query".to_string()))?,
            None => ReviewSortColumn::CreatedAt,
        };

        let order = match order {
            Some(value) => SortOrder::parse(&value)
                .ok_or_else(|| AppError::BadRequest("Invalid order query".to_string()))?,
            None => SortOrder::Desc,
        };

        Ok(Self {
            sort_by,
            order,
            category,
        })
    }
}

/// Parameters for atomically adding to a review's vote tally.
#[derive(Debug, Clone, PartialEq)]
pub struct IncrementVotesParams {
    pub review_id: i32,
    /// Signed amount to add.
    pub inc_votes: i32,
}

impl IncrementVotesParams {
    pub fn from_dto(review_id: i32, dto: UpdateReviewVotesDto) -> Self {
        Self {
            review_id,
            inc_votes: dto.inc_votes,
        }
    }
}
