//! SeaORM entities for the review store.
//!
//! One module per table. The table and column names mirror the relational schema the API
//! reads and writes, so renaming a field here is a schema change.

pub mod prelude;

pub mod category;
pub mod comment;
pub mod review;
pub mod user;
