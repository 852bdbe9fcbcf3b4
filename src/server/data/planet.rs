//! Planet data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::planet::{CreatePlanetParam, Planet};

/// Repository providing database operations for planets.
pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    /// Creates a new PlanetRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a planet.
    ///
    /// # Returns
    /// - `Ok(Planet)` - The created planet with generated ID
    /// - `Err(DbErr)` - Database error during insert, including a duplicate `name`
    pub async fn create(&self, param: CreatePlanetParam) -> Result<Planet, DbErr> {
        let entity = entity::planet::ActiveModel {
            name: ActiveValue::Set(param.name),
            diameter: ActiveValue::Set(param.diameter),
            rotation_period: ActiveValue::Set(param.rotation_period),
            orbital_period: ActiveValue::Set(param.orbital_period),
            gravity: ActiveValue::Set(param.gravity),
            population: ActiveValue::Set(param.population),
            climate: ActiveValue::Set(param.climate),
            terrain: ActiveValue::Set(param.terrain),
            surface_water: ActiveValue::Set(param.surface_water),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Planet::from_entity(entity))
    }

    /// Gets every planet ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Finds a planet by ID, `None` when it does not exist.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Planet::from_entity))
    }

    /// Checks whether a planet with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Planet::find()
            .filter(entity::planet::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
