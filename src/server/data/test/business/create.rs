use super::*;

/// Tests creating a business with custom settings.
///
/// Verifies that settings survive the round trip through the JSON column.
///
/// Expected: Ok(Business) with the given settings
#[tokio::test]
async fn creates_business_with_settings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Business)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user_with_role(db, "BUSINESS_OWNER").await?;
    let settings = BusinessSettings {
        opening_hour: 8,
        closing_hour: 20,
        cancellation_window_hours: 24,
        online_payments: false,
        currency: "eur".to_string(),
    };

    let repo = BusinessRepository::new(db);
    let business = repo
        .create(CreateBusinessParam {
            owner_id: owner.id,
            name: "Sharp Cuts".to_string(),
            description: Some("Classic barbershop".to_string()),
            address: None,
            phone: None,
            settings: settings.clone(),
        })
        .await?;

    assert_eq!(business.owner_id, owner.id);
    assert_eq!(business.name, "Sharp Cuts");
    assert_eq!(business.settings, settings);

    let found = repo.find_by_id(business.id).await?.unwrap();
    assert_eq!(found.settings, settings);

    Ok(())
}

/// Tests that a business requires an existing owner.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Business)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BusinessRepository::new(db)
        .create(CreateBusinessParam {
            owner_id: 999,
            name: "Orphan".to_string(),
            description: None,
            address: None,
            phone: None,
            settings: BusinessSettings::default(),
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
