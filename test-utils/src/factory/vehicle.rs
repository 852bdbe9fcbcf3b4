//! Vehicle factory for creating test vehicle entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles with customizable fields.
///
/// Descriptive attributes not set through the builder are stored as NULL.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    model: Option<String>,
    vehicle_class: Option<String>,
    manufacturer: Option<String>,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Vehicle {id}"` where id is auto-incremented
    /// - all descriptive attributes: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Vehicle {}", id),
            model: None,
            vehicle_class: None,
            manufacturer: None,
        }
    }

    /// Sets the vehicle name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the vehicle model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the vehicle class.
    pub fn vehicle_class(mut self, vehicle_class: impl Into<String>) -> Self {
        self.vehicle_class = Some(vehicle_class.into());
        self
    }

    /// Sets the manufacturer.
    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::vehicle::Model)` - Created vehicle entity
    /// - `Err(DbErr)` - Database error during insert, including a duplicate name
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            name: ActiveValue::Set(self.name),
            model: ActiveValue::Set(self.model),
            vehicle_class: ActiveValue::Set(self.vehicle_class),
            manufacturer: ActiveValue::Set(self.manufacturer),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle with default values.
///
/// Shorthand for `VehicleFactory::new(db).build().await`.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}
