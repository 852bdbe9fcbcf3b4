use super::*;

/// Tests creating a planet with descriptive attributes.
///
/// Verifies that set attributes are stored and the rest stay NULL.
///
/// Expected: Ok(Planet) with climate and terrain set
#[tokio::test]
async fn creates_planet_with_attributes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = PlanetRepository::new(db)
        .create(CreatePlanetParam {
            name: "Tatooine".to_string(),
            climate: Some("arid".to_string()),
            terrain: Some("desert".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.climate.as_deref(), Some("arid"));
    assert_eq!(planet.terrain.as_deref(), Some("desert"));
    assert!(planet.gravity.is_none());

    Ok(())
}

/// Tests that planet names are unique.
///
/// Expected: Err on the second insert with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::planet::PlanetFactory::new(db)
        .name("Hoth")
        .build()
        .await?;

    let result = PlanetRepository::new(db)
        .create(CreatePlanetParam {
            name: "Hoth".to_string(),
            ..Default::default()
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
