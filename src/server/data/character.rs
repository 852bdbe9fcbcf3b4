//! Character data repository for database operations.
//!
//! Provides the `CharacterRepository` for inserting and reading characters, converting
//! entity models into domain models for use within services and controllers.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::character::{Character, CreateCharacterParam};

/// Repository providing database operations for characters.
///
/// Characters are read-only through the API; `create` exists for seeding and tests.
pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    /// Creates a new CharacterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a character.
    ///
    /// # Arguments
    /// - `param` - Name and descriptive attributes of the character
    ///
    /// # Returns
    /// - `Ok(Character)` - The created character with generated ID
    /// - `Err(DbErr)` - Database error during insert, including a duplicate `name`
    pub async fn create(&self, param: CreateCharacterParam) -> Result<Character, DbErr> {
        let entity = entity::character::ActiveModel {
            name: ActiveValue::Set(param.name),
            birth_year: ActiveValue::Set(param.birth_year),
            eye_color: ActiveValue::Set(param.eye_color),
            gender: ActiveValue::Set(param.gender),
            hair_color: ActiveValue::Set(param.hair_color),
            height: ActiveValue::Set(param.height),
            mass: ActiveValue::Set(param.mass),
            skin_color: ActiveValue::Set(param.skin_color),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Character::from_entity(entity))
    }

    /// Gets every character ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Character>)` - All characters, empty if none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Finds a character by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - The character exists
    /// - `Ok(None)` - No character has this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    /// Checks whether a character with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Character::find()
            .filter(entity::character::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
