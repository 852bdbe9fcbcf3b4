//! Favorite domain models and parameters.
//!
//! A favorite row has four nullable foreign key columns, but the application only ever
//! writes a user plus exactly one target. `FavoriteTarget` carries that rule: repository
//! methods that write or match favorites accept a target rather than loose column values.

use crate::model::favorite::FavoriteDto;

/// The entity a user marked as favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Character(i32),
    Vehicle(i32),
    Planet(i32),
}

impl FavoriteTarget {
    /// ID of the targeted row.
    pub fn id(&self) -> i32 {
        match self {
            Self::Character(id) | Self::Vehicle(id) | Self::Planet(id) => *id,
        }
    }

    /// Human-readable entity name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Character(_) => "Character",
            Self::Vehicle(_) => "Vehicle",
            Self::Planet(_) => "Planet",
        }
    }

    /// Splits the target into `(character_id, vehicle_id, planet_id)` column values.
    pub fn into_columns(self) -> (Option<i32>, Option<i32>, Option<i32>) {
        match self {
            Self::Character(id) => (Some(id), None, None),
            Self::Vehicle(id) => (None, Some(id), None),
            Self::Planet(id) => (None, None, Some(id)),
        }
    }
}

/// A stored favorite row.
///
/// Column values are kept as stored; rows written by other tools may carry zero or
/// several targets.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: Option<i32>,
    pub character_id: Option<i32>,
    pub vehicle_id: Option<i32>,
    pub planet_id: Option<i32>,
}

impl Favorite {
    /// Returns the target when exactly one target column is set.
    pub fn target(&self) -> Option<FavoriteTarget> {
        match (self.character_id, self.vehicle_id, self.planet_id) {
            (Some(id), None, None) => Some(FavoriteTarget::Character(id)),
            (None, Some(id), None) => Some(FavoriteTarget::Vehicle(id)),
            (None, None, Some(id)) => Some(FavoriteTarget::Planet(id)),
            _ => None,
        }
    }

    /// Converts the favorite domain model to a DTO for API responses.
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            character_id: self.character_id,
            vehicle_id: self.vehicle_id,
            planet_id: self.planet_id,
        }
    }

    /// Converts an entity model to a favorite domain model at the repository boundary.
    pub fn from_entity(entity: entity::favorite::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            character_id: entity.character_id,
            vehicle_id: entity.vehicle_id,
            planet_id: entity.planet_id,
        }
    }
}

/// Parameters for inserting a favorite.
#[derive(Debug, Clone, Copy)]
pub struct CreateFavoriteParam {
    pub user_id: i32,
    pub target: FavoriteTarget,
}
