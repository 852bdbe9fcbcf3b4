//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.
//! The same OpenAPI document feeds the sitemap served at `/`.

use std::sync::Arc;

use axum::{Extension, Router};
use tower::Layer;
use tower_http::{cors::CorsLayer, normalize_path::NormalizePathLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the application's API router with all endpoints and the sitemap.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap of every registered route
/// - `GET /users` - List users
/// - `GET /users/favorites` - List every favorite
/// - `GET /characters`, `GET /characters/{character_id}` - Read characters
/// - `GET /planets`, `GET /planets/{planet_id}` - Read planets
/// - `GET /vehicles`, `GET /vehicles/{vehicle_id}` - Read vehicles
/// - `POST|DELETE /user/{user_id}/favorite/planet/{planet_id}` - Manage planet favorites
/// - `POST|DELETE /user/{user_id}/favorite/character/{character_id}` - Manage character favorites
/// - `POST|DELETE /user/{user_id}/favorite/vehicle/{vehicle_id}` - Manage vehicle favorites
///
/// # Returns
/// The API `Router<AppState>` together with the OpenAPI document describing it. Swagger UI
/// is not part of the router; [`app`] mounts it.
pub fn routes() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Star Wars characters, planets, vehicles and user favorites"), tags(
        (name = controller::sitemap::SITEMAP_TAG, description = "Route listing"),
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::vehicle::VEHICLE_TAG, description = "Vehicle API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::sitemap::get_sitemap))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::get_character_by_id))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet_by_id))
        .routes(routes!(controller::vehicle::get_vehicles))
        .routes(routes!(controller::vehicle::get_vehicle_by_id))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::delete_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::delete_favorite_character
        ))
        .routes(routes!(
            controller::favorite::add_favorite_vehicle,
            controller::favorite::delete_favorite_vehicle
        ))
        .split_for_parts();

    let sitemap = Arc::new(controller::sitemap::sitemap_from_openapi(&api));

    (routes.layer(Extension(sitemap)), api)
}

/// Builds the complete application from shared state.
///
/// API requests have a trailing slash trimmed before routing, so `/planets/` reaches the
/// same handler as `/planets`. Swagger UI is matched first and outside that
/// normalization: it redirects `/api/docs` to `/api/docs/` and serves the page there.
/// Every route, docs included, is wrapped in a permissive CORS layer and a per-request
/// trace span.
///
/// # Returns
/// - `Router` - Stateless router ready to be served
pub fn app(state: AppState) -> Router {
    let (routes, api) = routes();
    let api_routes = NormalizePathLayer::trim_trailing_slash().layer(routes.with_state(state));

    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback_service(api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
