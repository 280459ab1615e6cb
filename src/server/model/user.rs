//! User domain model.

use crate::model::user::UserDto;

/// Registered user who may own reviews and author comments.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique username, referenced by reviews and comments.
    pub username: String,
    /// Display name of the user.
    pub name: String,
    pub avatar_url: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            username: entity.username,
            name: entity.name,
            avatar_url: entity.avatar_url,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            username: self.username,
            name: self.name,
            avatar_url: self.avatar_url,
        }
    }
}
