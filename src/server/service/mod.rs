//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! work with domain models rather than DTOs or entity models, and hold the checks that must
//! run before a repository call, such as confirming a category or review exists.

pub mod category;
pub mod comment;
pub mod review;
pub mod user;
