use super::*;

/// Tests updating and then deleting a service.
///
/// Expected: fields replaced, then the service is gone
#[tokio::test]
async fn updates_and_deletes_service() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;

    let repo = ServiceRepository::new(db);
    let updated = repo
        .update(UpdateServiceParam {
            id: shop.service.id,
            name: "Skin Fade".to_string(),
            description: Some("Includes wash".to_string()),
            duration_minutes: 45,
            price_cents: 3500,
            active: false,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Skin Fade");
    assert_eq!(updated.duration_minutes, 45);
    assert!(!updated.active);

    assert!(repo.delete(shop.service.id).await?);
    assert!(repo.find_by_id(shop.service.id).await?.is_none());

    Ok(())
}

/// Tests updating a missing service.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_service() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ServiceRepository::new(db)
        .update(UpdateServiceParam {
            id: 5,
            name: "Ghost".to_string(),
            description: None,
            duration_minutes: 30,
            price_cents: 0,
            active: true,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
