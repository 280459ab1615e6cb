//! User service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

/// Service providing business logic for users.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users ordered by username
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);
        let users = repo.get_all().await?;
        Ok(users)
    }
}
