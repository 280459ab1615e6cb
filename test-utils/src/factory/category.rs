//! Category factory for creating test category rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let category = CategoryFactory::new(&db)
///     .slug("euro game")
///     .description("Abstact games that involve little luck")
///     .build()
///     .await?;
/// ```
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    description: String,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"category-{id}"` where id is auto-incremented
    /// - description: `"Category {id} description"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("category-{}", id),
            description: format!("Category {} description", id),
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the category row.
    ///
    /// # Returns
    /// - `Ok(entity::category::Model)` - Created category
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
///
/// Shorthand for `CategoryFactory::new(db).build().await`.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}
