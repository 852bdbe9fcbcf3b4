use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, favorite::UserFavoritesDto, user::UserListDto},
    server::{
        error::AppError,
        service::{favorite::FavoriteService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get all users.
///
/// Passwords are never included in the response.
///
/// # Returns
/// - `200 OK` - Every user ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "List of users", body = UserListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get every favorite row.
///
/// Despite the path, the response is not scoped to a single user: favorites of all
/// users are returned.
///
/// # Returns
/// - `200 OK` - Every favorite ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "List of favorites", body = UserFavoritesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(favorites)))
}
