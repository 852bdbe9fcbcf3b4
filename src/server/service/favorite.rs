//! Favorite service for creating, listing and removing favorites.
//!
//! Existence checks happen here rather than relying on foreign key enforcement, so a
//! missing user or target is always reported as 404 regardless of store settings.

use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::{FavoriteDto, UserFavoritesDto},
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository, user::UserRepository, vehicle::VehicleRepository,
        },
        error::AppError,
        model::favorite::{CreateFavoriteParam, FavoriteTarget},
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every favorite of every user.
    pub async fn get_all(&self) -> Result<UserFavoritesDto, AppError> {
        let user_favorites = FavoriteRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|favorite| favorite.into_dto())
            .collect();

        Ok(UserFavoritesDto { user_favorites })
    }

    /// Creates a favorite linking a user to a single target.
    ///
    /// Duplicate favorites are allowed; each call inserts a new row.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user owning the favorite
    /// - `target` - Character, vehicle or planet being favorited
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The created favorite
    /// - `Err(AppError::NotFound)` - User or target does not exist
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteDto, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        self.ensure_target_exists(target).await?;

        let favorite = FavoriteRepository::new(self.db)
            .create(CreateFavoriteParam {
                user_id: user.id,
                target,
            })
            .await?;

        tracing::debug!(
            "Created favorite {} for user {} '{}' ({} {})",
            favorite.id,
            user.id,
            user.user_name,
            target.kind(),
            target.id()
        );

        Ok(favorite.into_dto())
    }

    /// Deletes one favorite of a user matching the target.
    ///
    /// When the user holds duplicates only the one with the lowest ID is removed.
    ///
    /// # Returns
    /// - `Ok(())` - A matching favorite was deleted
    /// - `Err(AppError::NotFound)` - The user has no favorite for this target
    /// - `Err(AppError::DbErr)` - Database error during lookup or delete
    pub async fn delete(&self, user_id: i32, target: FavoriteTarget) -> Result<(), AppError> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let Some(favorite) = favorite_repo
            .find_by_user_and_target(user_id, target)
            .await?
        else {
            return Err(AppError::NotFound("Favorite not found".to_string()));
        };

        if !favorite_repo.delete(favorite.id).await? {
            // Removed concurrently between lookup and delete
            return Err(AppError::NotFound("Favorite not found".to_string()));
        }

        tracing::debug!(
            "Deleted favorite {} for user {} ({} {})",
            favorite.id,
            user_id,
            target.kind(),
            target.id()
        );

        Ok(())
    }

    async fn ensure_target_exists(&self, target: FavoriteTarget) -> Result<(), AppError> {
        let exists = match target {
            FavoriteTarget::Character(id) => CharacterRepository::new(self.db).exists(id).await?,
            FavoriteTarget::Vehicle(id) => VehicleRepository::new(self.db).exists(id).await?,
            FavoriteTarget::Planet(id) => PlanetRepository::new(self.db).exists(id).await?,
        };

        if !exists {
            return Err(AppError::NotFound(format!("{} not found", target.kind())));
        }

        Ok(())
    }
}
