use super::*;

/// Tests updating only the provided fields.
///
/// Verifies that fields left as `None` keep their values while provided fields
/// are replaced.
///
/// Expected: Ok(Some(User)) with name changed and email untouched
#[tokio::test]
async fn updates_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParam {
            id: created.id,
            name: Some("Renamed".to_string()),
            role: Some(Role::Worker),
            business_id: Some(3),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.role, Role::Worker);
    assert_eq!(updated.business_id, Some(3));
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests replacing the password hash.
///
/// Expected: stored hash changed
#[tokio::test]
async fn updates_password_hash() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update(UpdateUserParam {
        id: created.id,
        password_hash: Some("new-hash".to_string()),
        ..Default::default()
    })
    .await?;

    let (_, hash) = repo
        .find_credentials_by_email(&created.email)
        .await?
        .unwrap();
    assert_eq!(hash, "new-hash");

    Ok(())
}

/// Tests updating a missing account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(UpdateUserParam {
            id: 999,
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
