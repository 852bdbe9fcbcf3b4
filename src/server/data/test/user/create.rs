use super::*;

/// Tests creating a user with a password.
///
/// Verifies that the repository stores both the user name and the password and
/// returns the generated ID.
///
/// Expected: Ok(User) with the provided fields
#[tokio::test]
async fn creates_user_with_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            user_name: "luke".to_string(),
            password: Some("x".to_string()),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.user_name, "luke");
    assert_eq!(user.password.as_deref(), Some("x"));

    Ok(())
}

/// Tests creating two users with the same name.
///
/// User names are not unique, so both inserts succeed with distinct IDs.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_duplicate_user_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo
        .create(CreateUserParam {
            user_name: "han".to_string(),
            password: None,
        })
        .await?;
    let second = repo
        .create(CreateUserParam {
            user_name: "han".to_string(),
            password: None,
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
