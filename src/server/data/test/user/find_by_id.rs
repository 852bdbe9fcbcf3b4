use super::*;

/// Tests finding a stored user by ID.
///
/// Verifies that the stored password is returned alongside the name so that only the
/// DTO conversion decides what is exposed.
///
/// Expected: Ok(Some(User)) with matching fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(CreateUserParam {
            user_name: "obi-wan".to_string(),
            password: Some("hello there".to_string()),
        })
        .await?;

    let found = repo
        .find_by_id(created.id)
        .await?
        .expect("user should exist");

    assert_eq!(found, created);
    assert_eq!(found.password.as_deref(), Some("hello there"));

    Ok(())
}

/// Tests finding a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    assert!(UserRepository::new(db)
        .find_by_id(user.id + 1)
        .await?
        .is_none());

    Ok(())
}
