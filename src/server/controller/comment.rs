use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CommentsDto, CreateCommentDto},
    },
    server::{
        error::AppError, model::comment::CreateCommentParams, service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// List the comments on a review, newest first.
///
/// # Returns
/// - `200 OK` - `{comments: [...]}`, empty if the review has none
/// - `400 Bad Request` - `review_id` is not an integer
/// - `404 Not Found` - No review with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews/{review_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("review_id" = i32, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "Comments on the review", body = CommentsDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review_comments(
    State(state): State<AppState>,
    review_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(review_id) = review_id?;

    let service = CommentService::new(&state.db);
    let comments: Vec<CommentDto> = service
        .get_by_review_id(review_id)
        .await?
        .into_iter()
        .map(|c| c.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(CommentsDto { comments })))
}

/// Post a comment on a review.
///
/// The target review is the one named in the path.
///
/// # Returns
/// - `201 Created` - The created comment
/// - `400 Bad Request` - Malformed body, blank author or body, or unknown author
/// - `404 Not Found` - No review with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reviews/{review_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("review_id" = i32, Path, description = "Review id")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    review_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(review_id) = review_id?;
    let Json(payload) = payload?;

    let params = CreateCommentParams::from_dto(review_id, payload)?;

    let service = CommentService::new(&state.db);
    let comment = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}
