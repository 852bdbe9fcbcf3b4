use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::controller::favorite::{
    delete_favorite_character, delete_favorite_planet, delete_favorite_vehicle,
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Tests deleting a planet favorite twice.
///
/// Verifies that the first delete removes the row and an identical second delete
/// reports that nothing matched.
///
/// Expected: 200 OK `{"deleted": true}`, then 404 `{"error": "Favorite not found"}`
#[tokio::test]
async fn deletes_planet_favorite_then_reports_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holocron_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_favorite_planet(db, user.id, planet.id).await?;

    let resp = delete_favorite_planet(State(app_state(&test)), Path((user.id, planet.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!({ "deleted": true }));

    assert_eq!(entity::prelude::Favorite::find().count(db).await?, 0);

    let resp = delete_favorite_planet(State(app_state(&test)), Path((user.id, planet.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Favorite not found" })
    );

    Ok(())
}

/// Tests deleting one of several duplicate character favorites.
///
/// Expected: 200 OK and exactly one row removed
#[tokio::test]
async fn deletes_single_duplicate_character_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holocron_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    factory::create_favorite_character(db, user.id, character.id).await?;
    factory::create_favorite_character(db, user.id, character.id).await?;

    let resp = delete_favorite_character(State(app_state(&test)), Path((user.id, character.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["deleted"], true);

    assert_eq!(entity::prelude::Favorite::find().count(db).await?, 1);

    Ok(())
}

/// Tests that deleting another user's favorite does not match.
///
/// Expected: 404 Not Found and the favorite is kept
#[tokio::test]
async fn does_not_delete_other_users_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holocron_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    factory::create_favorite_vehicle(db, owner.id, vehicle.id).await?;

    let resp = delete_favorite_vehicle(State(app_state(&test)), Path((other.id, vehicle.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    assert_eq!(entity::prelude::Favorite::find().count(db).await?, 1);

    Ok(())
}
