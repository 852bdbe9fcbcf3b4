use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        favorite::{FavoriteCreatedDto, FavoriteDeletedDto},
    },
    server::{
        error::AppError, model::favorite::FavoriteTarget, service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

async fn add_favorite(
    state: &AppState,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<impl IntoResponse, AppError> {
    let favorite = FavoriteService::new(&state.db)
        .create(user_id, target)
        .await?;

    Ok((StatusCode::OK, Json(FavoriteCreatedDto { favorites: favorite })))
}

async fn delete_favorite(
    state: &AppState,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db)
        .delete(user_id, target)
        .await?;

    Ok((StatusCode::OK, Json(FavoriteDeletedDto { deleted: true })))
}

/// Add a planet to a user's favorites.
///
/// Each call creates a new favorite, even when the same one already exists.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - ID of the user owning the favorite
/// - `planet_id` - ID of the planet to favorite
///
/// # Returns
/// - `200 OK` - The created favorite
/// - `404 Not Found` - User or planet does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/user/{user_id}/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Created favorite", body = FavoriteCreatedDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    add_favorite(&state, user_id, FavoriteTarget::Planet(planet_id)).await
}

/// Remove a planet from a user's favorites.
///
/// Only one favorite is removed when the user holds duplicates.
///
/// # Returns
/// - `200 OK` - A favorite was deleted
/// - `404 Not Found` - The user has no favorite for this planet
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/user/{user_id}/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = FavoriteDeletedDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    delete_favorite(&state, user_id, FavoriteTarget::Planet(planet_id)).await
}

/// Add a character to a user's favorites.
///
/// # Returns
/// - `200 OK` - The created favorite
/// - `404 Not Found` - User or character does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/user/{user_id}/favorite/character/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Created favorite", body = FavoriteCreatedDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    add_favorite(&state, user_id, FavoriteTarget::Character(character_id)).await
}

/// Remove a character from a user's favorites.
///
/// # Returns
/// - `200 OK` - A favorite was deleted
/// - `404 Not Found` - The user has no favorite for this character
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/user/{user_id}/favorite/character/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = FavoriteDeletedDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_character(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    delete_favorite(&state, user_id, FavoriteTarget::Character(character_id)).await
}

#[utoipa::path(
    post,
    path = "/user/{user_id}/favorite/vehicle/{vehicle_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Created favorite", body = FavoriteCreatedDto),
        (status = 404, description = "User or vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_vehicle(
    State(state): State<AppState>,
    Path((user_id, vehicle_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    add_favorite(&state, user_id, FavoriteTarget::Vehicle(vehicle_id)).await
}

#[utoipa::path(
    delete,
    path = "/user/{user_id}/favorite/vehicle/{vehicle_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = FavoriteDeletedDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_vehicle(
    State(state): State<AppState>,
    Path((user_id, vehicle_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    delete_favorite(&state, user_id, FavoriteTarget::Vehicle(vehicle_id)).await
}
