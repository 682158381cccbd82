use super::*;

/// Tests replacing business settings.
///
/// Expected: Ok(Some(Business)) with new settings persisted
#[tokio::test]
async fn replaces_settings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Business)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user_with_role(db, "BUSINESS_OWNER").await?;
    let created = factory::create_business(db, owner.id).await?;
    let settings = BusinessSettings {
        cancellation_window_hours: 12,
        online_payments: false,
        ..Default::default()
    };

    let repo = BusinessRepository::new(db);
    let updated = repo
        .update_settings(created.id, &settings)
        .await?
        .unwrap();

    assert_eq!(updated.settings, settings);
    assert_eq!(
        repo.find_by_id(created.id).await?.unwrap().settings,
        settings
    );

    Ok(())
}
