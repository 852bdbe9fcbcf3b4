use super::*;

/// Tests listing vehicles ordered by ID.
///
/// Expected: Ok(vec) with both vehicles, lowest ID first
#[tokio::test]
async fn returns_all_vehicles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_vehicle(db).await?;
    let second = factory::create_vehicle(db).await?;

    let vehicles = VehicleRepository::new(db).get_all().await?;

    assert_eq!(vehicles.len(), 2);
    assert_eq!(vehicles[0].id, first.id);
    assert_eq!(vehicles[1].id, second.id);

    Ok(())
}
