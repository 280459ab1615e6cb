//! Database repository layer for all domain entities.
//!
//! Repositories borrow the shared connection, issue one parameterized query per read and one
//! atomic statement per write, and return domain models. A lookup that expected a single row
//! and found none fails with `AppError::NotFound`; every other store failure is passed up as
//! `AppError::DbErr` for the error chain to classify.

pub mod category;
pub mod comment;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
