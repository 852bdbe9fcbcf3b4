use super::*;

/// Tests listing characters ordered by ID.
///
/// Expected: Ok(vec) with every character, lowest ID first
#[tokio::test]
async fn returns_all_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_character(db).await?;
    let second = factory::create_character(db).await?;

    let characters = CharacterRepository::new(db).get_all().await?;

    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0].id, first.id);
    assert_eq!(characters[1].name, second.name);

    Ok(())
}

/// Tests listing characters from an empty table.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(CharacterRepository::new(db).get_all().await?.is_empty());

    Ok(())
}
