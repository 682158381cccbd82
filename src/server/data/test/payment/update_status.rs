use super::*;

/// Tests changing the status of a payment.
///
/// Expected: Ok(Some(Payment)) with SUCCEEDED
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, booking) = booked_shop(db).await?;
    let created = factory::create_payment(db, booking.id).await?;

    let updated = PaymentRepository::new(db)
        .update_status(created.id, PaymentStatus::Succeeded)
        .await?
        .unwrap();

    assert_eq!(updated.status, PaymentStatus::Succeeded);

    Ok(())
}
