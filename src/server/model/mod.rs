//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and transformed
//! to DTOs at the controller boundary. Parameter types carry already validated request input
//! into the service layer.

pub mod category;
pub mod comment;
pub mod review;
pub mod user;
