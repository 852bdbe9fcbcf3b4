//! Favorite factory for creating test favorite entities.
//!
//! Unlike the application's repository, the factory writes whatever combination of
//! target columns it is given, which lets tests seed rows that break the
//! one-target convention.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test favorites.
///
/// # Example
///
/// ```rust,ignore
/// let favorite = FavoriteFactory::new(&db, user.id)
///     .planet(planet.id)
///     .build()
///     .await?;
/// ```
pub struct FavoriteFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    character_id: Option<i32>,
    vehicle_id: Option<i32>,
    planet_id: Option<i32>,
}

impl<'a> FavoriteFactory<'a> {
    /// Creates a new FavoriteFactory for the given user with no target set.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the user owning the favorite
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id: Some(user_id),
            character_id: None,
            vehicle_id: None,
            planet_id: None,
        }
    }

    /// Sets the favorited character.
    pub fn character(mut self, character_id: i32) -> Self {
        self.character_id = Some(character_id);
        self
    }

    /// Sets the favorited vehicle.
    pub fn vehicle(mut self, vehicle_id: i32) -> Self {
        self.vehicle_id = Some(vehicle_id);
        self
    }

    /// Sets the favorited planet.
    pub fn planet(mut self, planet_id: i32) -> Self {
        self.planet_id = Some(planet_id);
        self
    }

    /// Builds and inserts the favorite entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::favorite::Model)` - Created favorite entity
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    pub async fn build(self) -> Result<entity::favorite::Model, DbErr> {
        entity::favorite::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            character_id: ActiveValue::Set(self.character_id),
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            planet_id: ActiveValue::Set(self.planet_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a favorite linking a user to a character.
pub async fn create_favorite_character(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    FavoriteFactory::new(db, user_id)
        .character(character_id)
        .build()
        .await
}

/// Creates a favorite linking a user to a vehicle.
pub async fn create_favorite_vehicle(
    db: &DatabaseConnection,
    user_id: i32,
    vehicle_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    FavoriteFactory::new(db, user_id)
        .vehicle(vehicle_id)
        .build()
        .await
}

/// Creates a favorite linking a user to a planet.
pub async fn create_favorite_planet(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    FavoriteFactory::new(db, user_id)
        .planet(planet_id)
        .build()
        .await
}
