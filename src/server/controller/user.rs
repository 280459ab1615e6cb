use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{UserDto, UsersDto},
    },
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// # Returns
/// - `200 OK` - `{users: [...]}` ordered by username
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Every user", body = UsersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users: Vec<UserDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|u| u.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(UsersDto { users })))
}
