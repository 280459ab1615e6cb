//! Comment domain model and creation parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, CreateCommentDto},
    server::error::{AppError, INVALID_INPUT},
};

/// Comment posted on a review.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub comment_id: i32,
    pub review_id: i32,
    /// Username of the comment's author.
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Converts an entity model to a comment domain model at the repository boundary.
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            comment_id: entity.comment_id,
            review_id: entity.review_id,
            author: entity.author,
            body: entity.body,
            votes: entity.votes,
            created_at: entity.created_at,
        }
    }

    /// Converts the comment domain model to a DTO for API responses.
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            comment_id: self.comment_id,
            review_id: self.review_id,
            author: self.author,
            body: self.body,
            votes: self.votes,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a comment on a review.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCommentParams {
    /// Target review, taken from the request path.
    pub review_id: i32,
    pub author: String,
    pub body: String,
}

impl CreateCommentParams {
    /// Converts a request DTO into creation parameters.
    ///
    /// Whether the author exists is left to the store's foreign key.
    ///
    /// # Arguments
    /// - `review_id` - Review id from the path segment
    /// - `dto` - Request body
    ///
    /// # Returns
    /// - `Ok(CreateCommentParams)` - Author and body are both non-blank
    /// - `Err(AppError::BadRequest)` - Author or body is empty or whitespace only
    pub fn from_dto(review_id: i32, dto: CreateCommentDto) -> Result<Self, AppError> {
        if dto.author.trim().is_empty() || dto.body.trim().is_empty() {
            return Err(AppError::BadRequest(INVALID_INPUT.to_string()));
        }

        Ok(Self {
            review_id,
            author: dto.author,
            body: dto.body,
        })
    }
}
