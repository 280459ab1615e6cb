//! Factory methods for creating test data.
//!
//! Factories insert a single row with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::create_user(&db).await?;
//!     let category = factory::create_category(&db).await?;
//!
//!     // Create a review with its category and owner
//!     let (category, owner, review) = factory::helpers::create_review_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let review = factory::review::ReviewFactory::new(&db, &category.slug, &owner.username)
//!     .title("Agricola")
//!     .votes(16)
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod comment;
pub mod helpers;
pub mod review;
pub mod user;

pub use category::create_category;
pub use comment::create_comment;
pub use review::create_review;
pub use user::create_user;
