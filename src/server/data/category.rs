//! Category data repository for database operations.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{error::AppError, model::category::Category};

/// Repository providing read access to board game categories.
pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    /// Creates a new CategoryRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every category ordered by slug.
    ///
    /// # Returns
    /// - `Ok(Vec<Category>)` - All categories (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Slug)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Gets a single category by its slug.
    ///
    /// # Returns
    /// - `Ok(Category)` - Category with the given slug
    /// - `Err(AppError::NotFound)` - No category has that slug
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_slug(&self, slug: &str) -> Result<Category, AppError> {
        let entity = entity::prelude::Category::find()
            .filter(entity::category::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        entity
            .map(Category::from_entity)
            .ok_or_else(|| AppError::NotFound(format!("Category not found for slug {}", slug)))
    }
}
