use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterDetailDto, CharacterListDto},
    },
    server::{error::AppError, service::character::CharacterService, state::AppState},
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// Get all characters.
///
/// # Returns
/// - `200 OK` - Every character ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "List of characters", body = CharacterListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a character by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `character_id` - ID of the character to fetch
///
/// # Returns
/// - `200 OK` - The character
/// - `404 Not Found` - No character has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "The requested character", body = CharacterDetailDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character_by_id(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::new(&state.db)
        .get_by_id(character_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

    Ok((StatusCode::OK, Json(CharacterDetailDto { character })))
}
