//! Vehicle domain models and parameters.

use crate::model::vehicle::VehicleDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub length: Option<String>,
    pub cost_in_credits: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
}

impl Vehicle {
    /// Converts the vehicle domain model to a DTO for API responses.
    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            name: self.name,
            model: self.model,
            vehicle_class: self.vehicle_class,
            manufacturer: self.manufacturer,
            length: self.length,
            cost_in_credits: self.cost_in_credits,
            crew: self.crew,
            passengers: self.passengers,
            max_atmosphering_speed: self.max_atmosphering_speed,
            cargo_capacity: self.cargo_capacity,
            consumables: self.consumables,
        }
    }

    /// Converts an entity model to a vehicle domain model at the repository boundary.
    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            model: entity.model,
            vehicle_class: entity.vehicle_class,
            manufacturer: entity.manufacturer,
            length: entity.length,
            cost_in_credits: entity.cost_in_credits,
            crew: entity.crew,
            passengers: entity.passengers,
            max_atmosphering_speed: entity.max_atmosphering_speed,
            cargo_capacity: entity.cargo_capacity,
            consumables: entity.consumables,
        }
    }
}

/// Parameters for inserting a vehicle. `name` must be unique.
#[derive(Debug, Clone, Default)]
pub struct CreateVehicleParam {
    pub name: String,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub length: Option<String>,
    pub cost_in_credits: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
}
