use super::*;

/// Tests deleting an existing favorite.
///
/// Verifies that the row is removed and the other rows are untouched.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_existing_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_holocron_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let removed = factory::create_favorite_planet(db, user.id, planet.id).await?;
    let kept = factory::create_favorite_planet(db, user.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.delete(removed.id).await?);

    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}

/// Tests deleting a favorite ID that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_holocron_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!FavoriteRepository::new(db).delete(1).await?);

    Ok(())
}
