//! Wire-level DTOs shared by the API handlers and their tests.

pub mod api;
pub mod category;
pub mod comment;
pub mod review;
pub mod user;
