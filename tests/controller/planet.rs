//! Tests for the planet endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::controller::planet::{get_planet_by_id, get_planets};

use super::*;

/// Tests that a planet with only a name and climate lists its other fields as null.
///
/// Expected: 200 OK with Tatooine, `climate: "arid"` and every other attribute null
#[tokio::test]
async fn lists_planet_with_null_attributes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holocron_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    factory::planet::PlanetFactory::new(db)
        .name("Tatooine")
        .climate("arid")
        .build()
        .await?;

    let resp = get_planets(State(app_state(&test))).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let planets = body["planets"].as_array().unwrap();
    assert_eq!(planets.len(), 1);

    let tatooine = planets[0].as_object().unwrap();
    assert_eq!(tatooine["name"], "Tatooine");
    assert_eq!(tatooine["climate"], "arid");
    for (key, value) in tatooine {
        if !matches!(key.as_str(), "id" | "name" | "climate") {
            assert!(value.is_null(), "{key} should be null");
        }
    }

    Ok(())
}

/// Tests fetching a planet by ID.
///
/// Expected: 200 OK with the planet under the `planet` key
#[tokio::test]
async fn returns_planet_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holocron_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let resp = get_planet_by_id(State(app_state(&test)), Path(planet.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["planet"]["id"], planet.id);
    assert_eq!(body["planet"]["name"], planet.name);

    Ok(())
}

/// Tests fetching a planet that does not exist.
///
/// Expected: 404 Not Found with `{"error": "Planet not found"}`
#[tokio::test]
async fn returns_not_found_for_missing_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holocron_tables().build().await?;

    let resp = get_planet_by_id(State(app_state(&test)), Path(1))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "Planet not found");

    Ok(())
}
