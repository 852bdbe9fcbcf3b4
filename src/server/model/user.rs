//! User domain models and parameters.

use crate::model::user::UserDto;

/// Registered user of the API.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub user_name: String,
    /// Stored as-is; never exposed through a DTO.
    pub password: Option<String>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses, dropping the password.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            user_name: self.user_name,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_name: entity.user_name,
            password: entity.password,
        }
    }
}

/// Parameters for inserting a user.
#[derive(Debug, Clone, Default)]
pub struct CreateUserParam {
    pub user_name: String,
    pub password: Option<String>,
}
