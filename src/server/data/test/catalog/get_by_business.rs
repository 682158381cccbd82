use super::*;

/// Tests listing services with and without inactive ones.
///
/// Expected: all three services, or two when only active ones are requested
#[tokio::test]
async fn filters_inactive_services() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    factory::create_service(db, shop.business.id).await?;
    factory::service::ServiceFactory::new(db, shop.business.id)
        .active(false)
        .build()
        .await?;
    let other = factory::helpers::create_business_with_dependencies(db).await?;

    let repo = ServiceRepository::new(db);

    assert_eq!(repo.get_by_business(shop.business.id, false).await?.len(), 3);
    let active = repo.get_by_business(shop.business.id, true).await?;
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|s| s.active));
    assert!(active.iter().all(|s| s.id != other.service.id));

    Ok(())
}
