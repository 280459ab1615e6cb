//! Review factory for creating test review rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
///
/// The category slug and owner username are required since both are foreign keys.
///
/// # Example
///
/// ```rust,ignore
/// let review = ReviewFactory::new(&db, "euro game", "mallionaire")
///     .title("Agricola")
///     .votes(1)
///     .build()
///     .await?;
/// ```
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    category: String,
    designer: String,
    owner: String,
    review_body: String,
    review_img_url: String,
    votes: i32,
    created_at: DateTime<Utc>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Review {id}"` where id is auto-incremented
    /// - designer: `"Designer {id}"`
    /// - review_body: `"Review body {id}"`
    /// - votes: `0`
    /// - created_at: now
    pub fn new(
        db: &'a DatabaseConnection,
        category: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Review {}", id),
            category: category.into(),
            designer: format!("Designer {}", id),
            owner: owner.into(),
            review_body: format!("Review body {}", id),
            review_img_url: format!("https://images.example.com/{}.jpg", id),
            votes: 0,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn designer(mut self, designer: impl Into<String>) -> Self {
        self.designer = designer.into();
        self
    }

    pub fn review_body(mut self, review_body: impl Into<String>) -> Self {
        self.review_body = review_body.into();
        self
    }

    pub fn review_img_url(mut self, review_img_url: impl Into<String>) -> Self {
        self.review_img_url = review_img_url.into();
        self
    }

    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the review row.
    ///
    /// # Returns
    /// - `Ok(entity::review::Model)` - Created review with its generated `review_id`
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            review_id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            category: ActiveValue::Set(self.category),
            designer: ActiveValue::Set(self.designer),
            owner: ActiveValue::Set(self.owner),
            review_body: ActiveValue::Set(self.review_body),
            review_img_url: ActiveValue::Set(self.review_img_url),
            votes: ActiveValue::Set(self.votes),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values for the given category and owner.
///
/// Shorthand for `ReviewFactory::new(db, category, owner).build().await`.
pub async fn create_review(
    db: &DatabaseConnection,
    category: impl Into<String>,
    owner: impl Into<String>,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, category, owner).build().await
}
