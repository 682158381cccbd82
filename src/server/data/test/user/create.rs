use super::*;

/// Tests creating an account.
///
/// Verifies that the repository inserts the account with its role and returns
/// it as a domain model.
///
/// Expected: Ok with role preserved
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            phone: Some("555-0100".to_string()),
            role: Role::BusinessOwner,
            ..client_param("owner@example.com")
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "owner@example.com");
    assert_eq!(user.role, Role::BusinessOwner);
    assert_eq!(user.phone.as_deref(), Some("555-0100"));

    Ok(())
}

/// Tests that emails are stored lowercased.
///
/// Expected: Ok with lowercased email
#[tokio::test]
async fn lowercases_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(client_param("Mixed.Case@Example.COM")).await?;

    assert_eq!(user.email, "mixed.case@example.com");

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Verifies that inserting a second account with the same email, in a different
/// case, fails at the database level.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(client_param("dup@example.com")).await?;
    let result = repo.create(client_param("DUP@example.com")).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
