use super::*;

/// Tests updating the profile of a business.
///
/// Expected: Ok(Some(Business)) with new profile and unchanged settings
#[tokio::test]
async fn updates_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Business)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user_with_role(db, "BUSINESS_OWNER").await?;
    let created = factory::create_business(db, owner.id).await?;

    let updated = BusinessRepository::new(db)
        .update(UpdateBusinessParam {
            id: created.id,
            name: "New Name".to_string(),
            description: None,
            address: Some("1 Main St".to_string()),
            phone: Some("555-0199".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.address.as_deref(), Some("1 Main St"));
    assert_eq!(updated.settings, BusinessSettings::default());

    Ok(())
}

/// Tests updating a missing business.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_business() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Business)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BusinessRepository::new(db)
        .update(UpdateBusinessParam {
            id: 42,
            name: "Nope".to_string(),
            description: None,
            address: None,
            phone: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
