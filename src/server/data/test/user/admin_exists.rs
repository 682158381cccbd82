use super::*;

/// Tests detecting when an admin account exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_role(db, "ADMIN").await?;

    let repo = UserRepository::new(db);

    assert!(repo.admin_exists().await?);

    Ok(())
}

/// Tests detecting when only non-admin accounts exist.
///
/// Verifies that the repository returns false for an empty table and for a
/// table with only clients and owners.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    factory::create_user(db).await?;
    factory::create_user_with_role(db, "BUSINESS_OWNER").await?;

    assert!(!repo.admin_exists().await?);

    Ok(())
}
