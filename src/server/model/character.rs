//! Character domain models and parameters.

use crate::model::character::CharacterDto;

/// A character with its free-text descriptive attributes.
///
/// Attribute units and formats are whatever the data source provided; nothing here
/// interprets them.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub skin_color: Option<String>,
}

impl Character {
    /// Converts the character domain model to a DTO for API responses.
    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            birth_year: self.birth_year,
            eye_color: self.eye_color,
            gender: self.gender,
            hair_color: self.hair_color,
            height: self.height,
            mass: self.mass,
            skin_color: self.skin_color,
        }
    }

    /// Converts an entity model to a character domain model at the repository boundary.
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            birth_year: entity.birth_year,
            eye_color: entity.eye_color,
            gender: entity.gender,
            hair_color: entity.hair_color,
            height: entity.height,
            mass: entity.mass,
            skin_color: entity.skin_color,
        }
    }
}

/// Parameters for inserting a character. `name` must be unique.
#[derive(Debug, Clone, Default)]
pub struct CreateCharacterParam {
    pub name: String,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub skin_color: Option<String>,
}
