use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        planet::{PlanetDetailDto, PlanetListDto},
    },
    server::{error::AppError, service::planet::PlanetService, state::AppState},
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

/// Get all planets.
///
/// # Returns
/// - `200 OK` - Every planet ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "List of planets", body = PlanetListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a planet by ID.
///
/// # Returns
/// - `200 OK` - The planet
/// - `404 Not Found` - No planet has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "The requested planet", body = PlanetDetailDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet_by_id(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::new(&state.db)
        .get_by_id(planet_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))?;

    Ok((StatusCode::OK, Json(PlanetDetailDto { planet })))
}
