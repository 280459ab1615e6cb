//! Route table and OpenAPI document.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        api::get_api_docs,
        category::{self, CATEGORY_TAG},
        comment::{self, COMMENT_TAG},
        fallback::route_not_found,
        review::{self, REVIEW_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Game Reviews API",
        description = "Board game categories, reviews, users and comments"
    ),
    tags(
        (name = CATEGORY_TAG, description = "Board game categories"),
        (name = REVIEW_TAG, description = "Reviews and their votes"),
        (name = COMMENT_TAG, description = "Comments on reviews"),
        (name = USER_TAG, description = "Registered users")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Handlers sharing a path are registered together so their methods merge into one route.
/// Anything unmatched, including a known path with an unknown method, answers 404.
pub fn router() -> Router<AppState> {
    let (router, api_doc) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(category::get_categories))
        .routes(routes!(review::get_reviews))
        .routes(routes!(
            review::get_review_by_id,
            review::update_review_votes
        ))
        .routes(routes!(
            comment::get_review_comments,
            comment::create_comment
        ))
        .routes(routes!(user::get_users))
        .split_for_parts();

    router
        .route("/api", get(get_api_docs))
        .layer(Extension(Arc::new(api_doc)))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
}
