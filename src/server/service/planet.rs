use sea_orm::DatabaseConnection;

use crate::{
    model::planet::{PlanetDto, PlanetListDto},
    server::{data::planet::PlanetRepository, error::AppError},
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<PlanetListDto, AppError> {
        let planets = PlanetRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|planet| planet.into_dto())
            .collect();

        Ok(PlanetListDto { planets })
    }

    /// Gets a planet by ID, `None` when it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PlanetDto>, AppError> {
        let planet = PlanetRepository::new(self.db).find_by_id(id).await?;

        Ok(planet.map(|p| p.into_dto()))
    }
}
