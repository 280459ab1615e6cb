use std::sync::Arc;

use axum::{response::IntoResponse, Extension, Json};
use utoipa::openapi::OpenApi;

/// Serves the OpenAPI document describing every endpoint.
///
/// The document is collected from the handler annotations when the router is built and
/// handed in as a request extension.
pub async fn get_api_docs(Extension(api_doc): Extension<Arc<OpenApi>>) -> impl IntoResponse {
    Json(api_doc.as_ref().clone())
}
