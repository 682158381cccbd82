use super::*;

/// Tests finding a payment by processor id and by booking.
///
/// Expected: both lookups return the payment; unknown id returns None
#[tokio::test]
async fn finds_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, booking) = booked_shop(db).await?;
    let created = factory::payment::PaymentFactory::new(db, booking.id)
        .processor_payment_id(Some("pi_lookup".to_string()))
        .build()
        .await?;

    let repo = PaymentRepository::new(db);

    assert_eq!(
        repo.find_by_processor_id("pi_lookup").await?.map(|p| p.id),
        Some(created.id)
    );
    assert_eq!(
        repo.find_by_booking_id(booking.id).await?.map(|p| p.id),
        Some(created.id)
    );
    assert!(repo.find_by_processor_id("pi_unknown").await?.is_none());

    Ok(())
}
