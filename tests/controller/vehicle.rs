//! Tests for the vehicle endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::controller::vehicle::{get_vehicle_by_id, get_vehicles};

use super::*;

/// Tests listing and fetching vehicles.
///
/// Expected: 200 OK for both the list and the lookup
#[tokio::test]
async fn lists_and_fetches_vehicles() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holocron_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .name("Snowspeeder")
        .vehicle_class("airspeeder")
        .build()
        .await?;
    factory::create_vehicle(db).await?;

    let resp = get_vehicles(State(app_state(&test))).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["vehicles"].as_array().unwrap().len(), 2);

    let resp = get_vehicle_by_id(State(app_state(&test)), Path(vehicle.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["vehicle"]["name"], "Snowspeeder");
    assert_eq!(body["vehicle"]["vehicle_class"], "airspeeder");
    assert!(body["vehicle"]["crew"].is_null());

    Ok(())
}

/// Tests fetching a vehicle that does not exist.
///
/// Expected: 404 Not Found with `{"error": "Vehicle not found"}`
#[tokio::test]
async fn returns_not_found_for_missing_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holocron_tables().build().await?;

    let resp = get_vehicle_by_id(State(app_state(&test)), Path(5))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "Vehicle not found");

    Ok(())
}
