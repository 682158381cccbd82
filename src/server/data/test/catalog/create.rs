use super::*;

/// Tests creating a service.
///
/// Expected: Ok(Service) marked active
#[tokio::test]
async fn creates_active_service() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;

    let service = ServiceRepository::new(db)
        .create(CreateServiceParam {
            business_id: shop.business.id,
            name: "Beard Trim".to_string(),
            description: None,
            duration_minutes: 15,
            price_cents: 1200,
        })
        .await?;

    assert!(service.active);
    assert_eq!(service.business_id, shop.business.id);
    assert_eq!(service.duration_minutes, 15);
    assert_eq!(service.price_cents, 1200);

    Ok(())
}
