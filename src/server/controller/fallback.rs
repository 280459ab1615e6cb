use crate::server::error::AppError;

/// Catch-all for unmatched paths and for registered paths hit with an unregistered method.
///
/// # Returns
/// - `404 Not Found` - `{msg: "Route not found"}`
pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
