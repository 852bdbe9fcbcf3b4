//! Vehicle data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::vehicle::{CreateVehicleParam, Vehicle};

/// Repository providing database operations for vehicles.
pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    /// Creates a new VehicleRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a vehicle.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The created vehicle with generated ID
    /// - `Err(DbErr)` - Database error during insert, including a duplicate `name`
    pub async fn create(&self, param: CreateVehicleParam) -> Result<Vehicle, DbErr> {
        let entity = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(param.name),
            model: ActiveValue::Set(param.model),
            vehicle_class: ActiveValue::Set(param.vehicle_class),
            manufacturer: ActiveValue::Set(param.manufacturer),
            length: ActiveValue::Set(param.length),
            cost_in_credits: ActiveValue::Set(param.cost_in_credits),
            crew: ActiveValue::Set(param.crew),
            passengers: ActiveValue::Set(param.passengers),
            max_atmosphering_speed: ActiveValue::Set(param.max_atmosphering_speed),
            cargo_capacity: ActiveValue::Set(param.cargo_capacity),
            consumables: ActiveValue::Set(param.consumables),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Vehicle::from_entity(entity))
    }

    /// Gets every vehicle ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Vehicle>, DbErr> {
        let entities = entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Vehicle::from_entity).collect())
    }

    /// Finds a vehicle by ID, `None` when it does not exist.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, DbErr> {
        let entity = entity::prelude::Vehicle::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Vehicle::from_entity))
    }

    /// Checks whether a vehicle with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
