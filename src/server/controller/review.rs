use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        review::{ReviewDto, ReviewWithCommentCountDto, ReviewsDto, UpdateReviewVotesDto},
    },
    server::{
        error::AppError,
        model::review::{GetReviewsParams, IncrementVotesParams},
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Raw query string of the review listing, validated into `GetReviewsParams`.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReviewListQuery {
    /// Column to sort by: review_id, title, category, designer, owner, votes, created_at or
    /// comment_count. Defaults to created_at.
    pub sort_by: Option<String>,
    /// `asc` or `desc`, case-insensitive. Defaults to desc.
    pub order: Option<String>,
    /// Only list reviews in the category with this slug.
    pub category: Option<String>,
}

/// List reviews with their comment counts.
///
/// # Returns
/// - `200 OK` - `{reviews: [...]}`, empty for a category without reviews
/// - `400 Bad Request` - Unknown `sort_by` column or `order` direction
/// - `404 Not Found` - `category` names a slug that does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    params(ReviewListQuery),
    responses(
        (status = 200, description = "Matching reviews", body = ReviewsDto),
        (status = 400, description = "Invalid sort_by or order", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    query: Result<Query<ReviewListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let params = GetReviewsParams::from_query(query.sort_by, query.order, query.category)?;

    let service = ReviewService::new(&state.db);
    let reviews: Vec<ReviewWithCommentCountDto> = service
        .get_all(params)
        .await?
        .into_iter()
        .map(|r| r.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(ReviewsDto { reviews })))
}

/// Get a single review with its comment count.
///
/// # Returns
/// - `200 OK` - The review, `comment_count` as a string
/// - `400 Bad Request` - `review_id` is not an integer
/// - `404 Not Found` - No review with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = i32, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "The review", body = ReviewWithCommentCountDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review_by_id(
    State(state): State<AppState>,
    review_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(review_id) = review_id?;

    let service = ReviewService::new(&state.db);
    let review = service.get_by_id(review_id).await?;

    Ok((StatusCode::OK, Json(review.into_dto())))
}

/// Add to a review's votes.
///
/// The body must carry an integer `inc_votes`; anything else is rejected before the store
/// is touched.
///
/// # Returns
/// - `200 OK` - The updated review
/// - `400 Bad Request` - `review_id` is not an integer or `inc_votes` is missing or not an
///   integer
/// - `404 Not Found` - No review with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = i32, Path, description = "Review id")
    ),
    request_body = UpdateReviewVotesDto,
    responses(
        (status = 200, description = "The updated review", body = ReviewDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review_votes(
    State(state): State<AppState>,
    review_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateReviewVotesDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(review_id) = review_id?;
    let Json(payload) = payload?;

    let service = ReviewService::new(&state.db);
    let review = service
        .increment_votes(IncrementVotesParams::from_dto(review_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(review.into_dto())))
}
