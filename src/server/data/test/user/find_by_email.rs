use super::*;

/// Tests finding an account regardless of email case.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_user_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("someone@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("SomeOne@Example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));
    assert!(repo.email_exists("someone@EXAMPLE.com").await?);

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None) and email_exists false
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("nobody@example.com").await?.is_none());
    assert!(!repo.email_exists("nobody@example.com").await?);
    assert!(repo
        .find_credentials_by_email("nobody@example.com")
        .await?
        .is_none());

    Ok(())
}

/// Tests that the credentials lookup returns the stored hash.
///
/// Expected: Ok(Some((User, hash)))
#[tokio::test]
async fn returns_credentials_with_hash() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (user, hash) = repo
        .find_credentials_by_email(&created.email)
        .await?
        .unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(hash, created.password_hash);

    Ok(())
}
