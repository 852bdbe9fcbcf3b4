use sea_orm::DatabaseConnection;

use crate::{
    model::character::{CharacterDto, CharacterListDto},
    server::{data::character::CharacterRepository, error::AppError},
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every character ordered by ID
    pub async fn get_all(&self) -> Result<CharacterListDto, AppError> {
        let characters = CharacterRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|character| character.into_dto())
            .collect();

        Ok(CharacterListDto { characters })
    }

    /// Gets a character by ID, `None` when it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CharacterDto>, AppError> {
        let character = CharacterRepository::new(self.db).find_by_id(id).await?;

        Ok(character.map(|c| c.into_dto()))
    }
}
