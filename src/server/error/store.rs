//! Classification of driver-level store failures.
//!
//! Postgres reports SQLSTATE codes, SQLite reports extended result codes. Both are mapped to
//! a closed set of kinds that have a fixed client-facing meaning.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, RuntimeErr};

use crate::{model::api::ErrorDto, server::error::INVALID_INPUT};

/// Postgres `invalid_text_representation`, e.g. `'abc'` cast to an integer column.
const PG_INVALID_TEXT_REPRESENTATION: &str = "22P02";
/// Postgres `numeric_value_out_of_range`, e.g. `votes + $1` overflowing an integer column.
const PG_NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";
const PG_NOT_NULL_VIOLATION: &str = "23502";
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";
/// `SQLITE_CONSTRAINT_NOTNULL`
const SQLITE_NOT_NULL_VIOLATION: &str = "1299";
/// `SQLITE_CONSTRAINT_FOREIGNKEY`
const SQLITE_FOREIGN_KEY_VIOLATION: &str = "787";

/// Store failures with a known HTTP meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// A value could not be parsed into the column's type.
    InvalidTextRepresentation,
    /// Arithmetic on a column left the range of its type.
    NumericValueOutOfRange,
    /// A required column was left empty.
    NotNullViolation,
    /// A foreign key pointed at a review that does not exist.
    MissingReview,
    /// Any other foreign key violation, or one whose constraint the driver did not name.
    MissingReference,
}

impl StoreErrorKind {
    /// Maps a driver error code, plus the violated constraint name when the driver reports
    /// one, to a kind. Unknown codes yield `None`.
    pub fn from_code(code: &str, constraint: Option<&str>) -> Option<Self> {
        match code {
            PG_INVALID_TEXT_REPRESENTATION => Some(Self::InvalidTextRepresentation),
            PG_NUMERIC_VALUE_OUT_OF_RANGE => Some(Self::NumericValueOutOfRange),
            PG_NOT_NULL_VIOLATION | SQLITE_NOT_NULL_VIOLATION => Some(Self::NotNullViolation),
            PG_FOREIGN_KEY_VIOLATION | SQLITE_FOREIGN_KEY_VIOLATION => match constraint {
                Some(name) if name.contains("review") => Some(Self::MissingReview),
                _ => Some(Self::MissingReference),
            },
            _ => None,
        }
    }

    /// Extracts the driver error carried by a SeaORM error and classifies it.
    ///
    /// Connection failures and errors raised by SeaORM itself are never classified.
    pub fn from_db_err(err: &DbErr) -> Option<Self> {
        let database_error = match err {
            DbErr::Exec(RuntimeErr::SqlxError(sqlx_err))
            | DbErr::Query(RuntimeErr::SqlxError(sqlx_err)) => sqlx_err.as_database_error()?,
            _ => return None,
        };

        let code = database_error.code()?;

        Self::from_code(&code, database_error.constraint())
    }

    pub fn status(self) -> StatusCode {
        match self {
            Self::MissingReview => StatusCode::NOT_FOUND,
            Self::InvalidTextRepresentation
            | Self::NumericValueOutOfRange
            | Self::NotNullViolation
            | Self::MissingReference => StatusCode::BAD_REQUEST,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::MissingReview => "Review not found",
            _ => INVALID_INPUT,
        }
    }
}

impl IntoResponse for StoreErrorKind {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorDto {
                msg: self.message().to_string(),
            }),
        )
            .into_response()
    }
}
