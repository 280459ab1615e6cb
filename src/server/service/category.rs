//! Category service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository, error::AppError, model::category::Category,
};

/// Service providing business logic for board game categories.
pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    /// Creates a new CategoryService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every category.
    ///
    /// # Returns
    /// - `Ok(Vec<Category>)` - All categories ordered by slug
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);
        let categories = repo.get_all().await?;
        Ok(categories)
    }
}
