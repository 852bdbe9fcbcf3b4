//! Favorite data repository for database operations.
//!
//! Provides the `FavoriteRepository` for creating, listing, matching and deleting
//! favorites. Writes go through `FavoriteTarget`, so every row this repository inserts
//! has a user and exactly one target column set.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::favorite::{CreateFavoriteParam, Favorite, FavoriteTarget};

/// Repository providing database operations for favorites.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new FavoriteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a favorite for a user and a single target.
    ///
    /// Does not check that the user or target exist; the store's foreign key
    /// enforcement, if enabled, is the only guard at this layer.
    ///
    /// # Arguments
    /// - `param` - The owning user ID and the favorited target
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite with generated ID
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    pub async fn create(&self, param: CreateFavoriteParam) -> Result<Favorite, DbErr> {
        let (character_id, vehicle_id, planet_id) = param.target.into_columns();

        let entity = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(Some(param.user_id)),
            character_id: ActiveValue::Set(character_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite::from_entity(entity))
    }

    /// Gets every favorite row ordered by ID, regardless of owner.
    pub async fn get_all(&self) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::Favorite::find()
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favorite::from_entity).collect())
    }

    /// Finds the first favorite of a user matching the target.
    ///
    /// Only the user column and the target's own column are compared, so a row with
    /// extra target columns set still matches. When duplicates exist the lowest ID wins.
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - A matching favorite exists
    /// - `Ok(None)` - The user has no favorite for this target
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_and_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, DbErr> {
        let query = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id));

        let query = match target {
            FavoriteTarget::Character(id) => {
                query.filter(entity::favorite::Column::CharacterId.eq(id))
            }
            FavoriteTarget::Vehicle(id) => query.filter(entity::favorite::Column::VehicleId.eq(id)),
            FavoriteTarget::Planet(id) => query.filter(entity::favorite::Column::PlanetId.eq(id)),
        };

        let entity = query
            .order_by_asc(entity::favorite::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Favorite::from_entity))
    }

    /// Deletes the favorite with the provided ID.
    ///
    /// # Returns
    /// - `Ok(true)` - The row was deleted
    /// - `Ok(false)` - No row had this ID
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
