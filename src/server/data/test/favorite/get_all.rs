use super::*;

/// Tests listing favorites across every user.
///
/// Verifies that favorites of all users are returned, including rows seeded with
/// more than one target column.
///
/// Expected: Ok(vec) with all three rows in ID order
#[tokio::test]
async fn returns_favorites_of_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_holocron_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::create_user(db).await?;
    let leia = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let character = factory::create_character(db).await?;

    factory::create_favorite_planet(db, luke.id, planet.id).await?;
    factory::create_favorite_character(db, leia.id, character.id).await?;
    factory::favorite::FavoriteFactory::new(db, leia.id)
        .planet(planet.id)
        .character(character.id)
        .build()
        .await?;

    let favorites = FavoriteRepository::new(db).get_all().await?;

    assert_eq!(favorites.len(), 3);
    assert_eq!(favorites[0].user_id, Some(luke.id));
    assert_eq!(favorites[1].user_id, Some(leia.id));
    assert_eq!(favorites[2].planet_id, Some(planet.id));
    assert_eq!(favorites[2].character_id, Some(character.id));

    Ok(())
}
