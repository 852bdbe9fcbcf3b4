use super::*;

/// Tests creating a vehicle with its model and class.
///
/// Expected: Ok(Vehicle) with the provided fields
#[tokio::test]
async fn creates_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = VehicleRepository::new(db)
        .create(CreateVehicleParam {
            name: "Sand Crawler".to_string(),
            model: Some("Digger Crawler".to_string()),
            vehicle_class: Some("wheeled".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(vehicle.id > 0);
    assert_eq!(vehicle.model.as_deref(), Some("Digger Crawler"));
    assert_eq!(vehicle.vehicle_class.as_deref(), Some("wheeled"));
    assert!(vehicle.crew.is_none());

    Ok(())
}

/// Tests that vehicle names are unique.
///
/// Expected: Err on the second insert with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_vehicle(db).await?;

    let result = VehicleRepository::new(db)
        .create(CreateVehicleParam {
            name: existing.name,
            ..Default::default()
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
