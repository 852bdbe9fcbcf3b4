use super::*;

/// Tests the existence check for stored and unknown characters.
///
/// Expected: Ok(true) for the stored ID, Ok(false) otherwise
#[tokio::test]
async fn reports_existence_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    let repo = CharacterRepository::new(db);

    assert!(repo.exists(character.id).await?);
    assert!(!repo.exists(character.id + 1).await?);

    Ok(())
}
