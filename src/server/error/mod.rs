//! Error types and HTTP response handling.
//!
//! `AppError` is the single failure type flowing out of handlers, services and repositories.
//! Its `IntoResponse` implementation is the error-classification chain: every failure is
//! resolved to a status code and a `{msg}` body by the first of three ordered stages that
//! recognizes it.

pub mod config;
pub mod store;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, store::StoreErrorKind},
};

/// Message returned for every malformed request.
pub const INVALID_INPUT: &str = "Invalid input";

/// Top-level application error type.
///
/// Wraps infrastructure errors via `#[from]` and carries the deliberately raised domain
/// failures (`NotFound`, `BadRequest`) with their client-facing message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Classified by driver error code when possible, otherwise a 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path parameters: {}", rejection.body_text());
        Self::BadRequest(INVALID_INPUT.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self::BadRequest(INVALID_INPUT.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        Self::BadRequest(INVALID_INPUT.to_string())
    }
}

/// Builds an error response with the uniform `{msg}` body.
fn error_response(status: StatusCode, msg: String) -> Response {
    (status, Json(ErrorDto { msg })).into_response()
}

/// Converts application errors into HTTP responses.
///
/// Stages, first match wins:
/// 1. Domain errors raised on purpose carry their own status and message.
/// 2. Store errors with a recognized driver code map to a fixed status, see
///    [`StoreErrorKind`].
/// 3. Everything else is logged and answered with a generic 500.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let err = match self {
            Self::NotFound(msg) => return error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => return error_response(StatusCode::BAD_REQUEST, msg),
            err => err,
        };

        if let Self::DbErr(ref db_err) = err {
            if let Some(kind) = StoreErrorKind::from_db_err(db_err) {
                tracing::debug!("Store error classified as {:?}: {}", kind, db_err);
                return kind.into_response();
            }
        }

        InternalServerError(err).into_response()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
