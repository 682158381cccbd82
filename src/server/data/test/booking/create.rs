use super::*;

/// Tests inserting a booking.
///
/// Verifies that new bookings start as PENDING and unpaid with the given interval.
///
/// Expected: Ok(Booking) with status PENDING
#[tokio::test]
async fn creates_pending_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let start = tomorrow_at(11);

    let booking = BookingRepository::new(db)
        .create(CreateBookingParam {
            client_id: client.id,
            worker_id: shop.worker.id,
            service_id: shop.service.id,
            business_id: shop.business.id,
            start_time: start,
            end_time: start + Duration::minutes(30),
            notes: Some("Short on the sides".to_string()),
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Pending);
    assert!(!booking.is_paid);
    assert_eq!(booking.start_time, start);
    assert_eq!(booking.end_time, start + Duration::minutes(30));
    assert_eq!(booking.notes.as_deref(), Some("Short on the sides"));

    Ok(())
}
