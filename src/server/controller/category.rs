use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoriesDto, CategoryDto},
    },
    server::{error::AppError, service::category::CategoryService, state::AppState},
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List all categories.
///
/// # Returns
/// - `200 OK` - `{categories: [...]}` ordered by slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Every category", body = CategoriesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let categories: Vec<CategoryDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|c| c.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(CategoriesDto { categories })))
}
