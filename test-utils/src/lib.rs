//! Game Reviews Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the review
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases, factories for individual rows, and the canonical seed dataset the HTTP tests
//! run against.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting single rows with sensible defaults
//! - **seed**: The fixed dataset (4 categories, 4 users, 13 reviews, 6 comments)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, seed};
//!
//! #[tokio::test]
//! async fn lists_categories() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_review_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!     seed::seed_test_data(db).await?;
//!
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod seed;
