use super::*;

/// Tests deleting a business with bookings.
///
/// Verifies that services and bookings are removed with the business.
///
/// Expected: Ok(true) and no remaining bookings
#[tokio::test]
async fn deletes_business_and_dependents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;

    let deleted = BusinessRepository::new(db).delete(shop.business.id).await?;

    assert!(deleted);
    let booking = crate::server::data::booking::BookingRepository::new(db)
        .find_by_id(booking.id)
        .await?;
    assert!(booking.is_none());

    Ok(())
}

/// Tests deleting a missing business.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_business() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Business)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!BusinessRepository::new(db).delete(7).await?);

    Ok(())
}
