use super::*;

/// Tests recording the first payment attempt for a booking.
///
/// Expected: Ok(Payment) in PENDING with the fee breakdown
#[tokio::test]
async fn inserts_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, booking) = booked_shop(db).await?;
    let fees = FeeBreakdown::compute(2500, 500);

    let payment = PaymentRepository::new(db)
        .upsert_pending(UpsertPaymentParam {
            booking_id: booking.id,
            fees,
            currency: "usd".to_string(),
            processor_payment_id: "pi_first".to_string(),
        })
        .await?;

    assert_eq!(payment.booking_id, booking.id);
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.fees, fees);
    assert_eq!(payment.processor_payment_id.as_deref(), Some("pi_first"));

    Ok(())
}

/// Tests that a retried payment refreshes the existing row.
///
/// A failed attempt is replaced by a new pending attempt with a new processor id.
///
/// Expected: same payment id, PENDING, new processor id
#[tokio::test]
async fn refreshes_existing_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, booking) = booked_shop(db).await?;
    let failed = factory::payment::PaymentFactory::new(db, booking.id)
        .status("FAILED")
        .build()
        .await?;

    let repo = PaymentRepository::new(db);
    let payment = repo
        .upsert_pending(UpsertPaymentParam {
            booking_id: booking.id,
            fees: FeeBreakdown::compute(3000, 500),
            currency: "usd".to_string(),
            processor_payment_id: "pi_retry".to_string(),
        })
        .await?;

    assert_eq!(payment.id, failed.id);
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.fees.amount_cents, 3000);
    assert!(repo.find_by_processor_id("pi_retry").await?.is_some());
    assert!(repo
        .find_by_processor_id(failed.processor_payment_id.as_deref().unwrap())
        .await?
        .is_none());

    Ok(())
}
