use sea_orm::DatabaseConnection;

use crate::{
    model::vehicle::{VehicleDto, VehicleListDto},
    server::{data::vehicle::VehicleRepository, error::AppError},
};

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every vehicle ordered by ID
    pub async fn get_all(&self) -> Result<VehicleListDto, AppError> {
        let vehicles = VehicleRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|vehicle| vehicle.into_dto())
            .collect();

        Ok(VehicleListDto { vehicles })
    }

    /// Gets a vehicle by ID, `None` when it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<VehicleDto>, AppError> {
        let vehicle = VehicleRepository::new(self.db).find_by_id(id).await?;

        Ok(vehicle.map(|v| v.into_dto()))
    }
}
