//! HTTP request handlers.
//!
//! One handler per API operation. Handlers coerce path, query and body input, call the
//! service layer and convert domain models to DTOs. Every failure is returned as `AppError`
//! and resolved to a status code by its `IntoResponse` implementation.

pub mod api;
pub mod category;
pub mod comment;
pub mod fallback;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
