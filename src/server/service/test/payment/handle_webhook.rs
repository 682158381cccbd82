use super::*;

/// Tests that a succeeded intent marks the payment and booking.
///
/// Expected: payment SUCCEEDED, booking paid and CONFIRMED
#[tokio::test]
async fn succeeded_confirms_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = config(Url::parse("http://127.0.0.1:9").unwrap());
    let http_client = reqwest::Client::new();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;
    let payment = factory::payment::PaymentFactory::new(db, booking.id)
        .processor_payment_id(Some("pi_paid".to_string()))
        .build()
        .await?;

    let payload = event("payment_intent.succeeded", serde_json::json!({ "id": "pi_paid" }));
    PaymentService::new(db, &http_client, &config)
        .handle_webhook(&payload, Some(&signed(&payload)))
        .await?;

    let payment = PaymentRepository::new(db)
        .find_by_booking_id(payment.booking_id)
        .await?
        .unwrap();
    let booking = BookingRepository::new(db).find_by_id(booking.id).await?.unwrap();

    assert_eq!(payment.status, PaymentStatus::Succeeded);
    assert!(booking.is_paid);
    assert_eq!(booking.status, BookingStatus::Confirmed);

    Ok(())
}

/// Tests that a failed intent only marks the payment.
///
/// Expected: payment FAILED, booking untouched
#[tokio::test]
async fn failed_marks_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = config(Url::parse("http://127.0.0.1:9").unwrap());
    let http_client = reqwest::Client::new();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;
    factory::payment::PaymentFactory::new(db, booking.id)
        .processor_payment_id(Some("pi_declined".to_string()))
        .build()
        .await?;

    let payload = event(
        "payment_intent.payment_failed",
        serde_json::json!({ "id": "pi_declined" }),
    );
    PaymentService::new(db, &http_client, &config)
        .handle_webhook(&payload, Some(&signed(&payload)))
        .await?;

    let payment = PaymentRepository::new(db)
        .find_by_booking_id(booking.id)
        .await?
        .unwrap();
    let booking = BookingRepository::new(db).find_by_id(booking.id).await?.unwrap();

    assert_eq!(payment.status, PaymentStatus::Failed);
    assert!(!booking.is_paid);
    assert_eq!(booking.status, BookingStatus::Pending);

    Ok(())
}

/// Tests that a refund clears the paid flag.
///
/// Expected: payment REFUNDED, booking unpaid
#[tokio::test]
async fn refund_clears_paid_flag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = config(Url::parse("http://127.0.0.1:9").unwrap());
    let http_client = reqwest::Client::new();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let booking =
        factory::booking::BookingFactory::new(db, &shop.service, shop.worker.id, client.id)
            .status("CONFIRMED")
            .is_paid(true)
            .build()
            .await?;
    factory::payment::PaymentFactory::new(db, booking.id)
        .status("SUCCEEDED")
        .processor_payment_id(Some("pi_refund".to_string()))
        .build()
        .await?;

    let payload = event(
        "charge.refunded",
        serde_json::json!({ "id": "ch_1", "payment_intent": "pi_refund" }),
    );
    PaymentService::new(db, &http_client, &config)
        .handle_webhook(&payload, Some(&signed(&payload)))
        .await?;

    let payment = PaymentRepository::new(db)
        .find_by_booking_id(booking.id)
        .await?
        .unwrap();
    let booking = BookingRepository::new(db).find_by_id(booking.id).await?.unwrap();

    assert_eq!(payment.status, PaymentStatus::Refunded);
    assert!(!booking.is_paid);
    assert_eq!(booking.status, BookingStatus::Confirmed);

    Ok(())
}

/// Tests acknowledging events for unknown intents and unknown event kinds.
///
/// Expected: Ok for both
#[tokio::test]
async fn acknowledges_unknown_events() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = config(Url::parse("http://127.0.0.1:9").unwrap());
    let http_client = reqwest::Client::new();
    let service = PaymentService::new(db, &http_client, &config);

    let unknown_intent =
        event("payment_intent.succeeded", serde_json::json!({ "id": "pi_nobody" }));
    service
        .handle_webhook(&unknown_intent, Some(&signed(&unknown_intent)))
        .await?;

    let unknown_kind = event("customer.created", serde_json::json!({ "id": "cus_1" }));
    service
        .handle_webhook(&unknown_kind, Some(&signed(&unknown_kind)))
        .await?;

    Ok(())
}

/// Tests rejecting missing and forged signatures.
///
/// Expected: Err(PaymentErr(InvalidSignature)) for both
#[tokio::test]
async fn rejects_bad_signatures() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = config(Url::parse("http://127.0.0.1:9").unwrap());
    let http_client = reqwest::Client::new();
    let service = PaymentService::new(db, &http_client, &config);

    let payload = event("payment_intent.succeeded", serde_json::json!({ "id": "pi_1" }));
    let forged = sign_payload(&payload, "whsec_forged", Utc::now().timestamp()).unwrap();

    assert!(matches!(
        service.handle_webhook(&payload, None).await,
        Err(AppError::PaymentErr(PaymentError::InvalidSignature(_)))
    ));
    assert!(matches!(
        service.handle_webhook(&payload, Some(&forged)).await,
        Err(AppError::PaymentErr(PaymentError::InvalidSignature(_)))
    ));

    Ok(())
}

/// Tests a failure event that arrives after the payment already succeeded.
///
/// Expected: payment stays SUCCEEDED and the booking stays paid
#[tokio::test]
async fn late_failure_keeps_succeeded_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = config(Url::parse("http://127.0.0.1:9").unwrap());
    let http_client = reqwest::Client::new();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let booking = factory::booking::BookingFactory::new(db, &shop.service, shop.worker.id, client.id)
        .status("CONFIRMED")
        .is_paid(true)
        .build()
        .await?;
    factory::payment::PaymentFactory::new(db, booking.id)
        .status("SUCCEEDED")
        .processor_payment_id(Some("pi_settled".to_string()))
        .build()
        .await?;

    let payload = event(
        "payment_intent.payment_failed",
        serde_json::json!({ "id": "pi_settled" }),
    );
    PaymentService::new(db, &http_client, &config)
        .handle_webhook(&payload, Some(&signed(&payload)))
        .await?;

    let payment = PaymentRepository::new(db)
        .find_by_booking_id(booking.id)
        .await?
        .unwrap();
    let booking = BookingRepository::new(db).find_by_id(booking.id).await?.unwrap();

    assert_eq!(payment.status, PaymentStatus::Succeeded);
    assert!(booking.is_paid);
    assert_eq!(booking.status, BookingStatus::Confirmed);

    Ok(())
}
