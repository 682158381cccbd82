use super::*;

/// Tests changing the status of a booking.
///
/// Expected: Ok(Some(Booking)) with the new status
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .update_status(booking.id, BookingStatus::Confirmed)
        .await?
        .unwrap();

    assert_eq!(updated.status, BookingStatus::Confirmed);
    assert_eq!(
        repo.find_by_id(booking.id).await?.unwrap().status,
        BookingStatus::Confirmed
    );

    Ok(())
}

/// Tests marking a booking as paid and unpaid again.
///
/// Expected: is_paid toggles
#[tokio::test]
async fn sets_paid_flag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;

    let repo = BookingRepository::new(db);

    assert!(repo.set_paid(booking.id, true).await?.unwrap().is_paid);
    assert!(!repo.set_paid(booking.id, false).await?.unwrap().is_paid);

    Ok(())
}

/// Tests updating a missing booking.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);

    assert!(repo
        .update_status(404, BookingStatus::Cancelled)
        .await?
        .is_none());
    assert!(repo.set_paid(404, true).await?.is_none());

    Ok(())
}
