use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Flat view of a favorite row. Target columns that are not set serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: Option<i32>,
    pub character_id: Option<i32>,
    pub vehicle_id: Option<i32>,
    pub planet_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesDto {
    pub user_favorites: Vec<FavoriteDto>,
}

/// Response body after creating a favorite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteCreatedDto {
    pub favorites: FavoriteDto,
}

/// Response body after deleting a favorite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDeletedDto {
    pub deleted: bool,
}
