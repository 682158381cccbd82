use super::*;

/// Tests starting a checkout against the processor.
///
/// Expected: Ok with a PENDING payment carrying the fee breakdown for 2500 cents
#[tokio::test]
async fn creates_pending_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = config(start_mock_processor().await);
    let http_client = reqwest::Client::new();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;

    let checkout = PaymentService::new(db, &http_client, &config)
        .checkout(client.id, booking.id)
        .await?;

    assert_eq!(checkout.client_secret, format!("pi_{}_secret", booking.id));
    assert_eq!(checkout.payment.status, PaymentStatus::Pending);
    assert_eq!(checkout.payment.fees.amount_cents, 2500);
    assert_eq!(checkout.payment.fees.processor_fee_cents, 103);
    assert_eq!(checkout.payment.fees.platform_fee_cents, 125);
    assert_eq!(checkout.payment.fees.net_amount_cents, 2272);
    assert_eq!(
        checkout.payment.processor_payment_id,
        Some(format!("pi_{}_2500", booking.id))
    );

    Ok(())
}

/// Tests that a second checkout refreshes the same payment row.
///
/// Expected: Ok with the same payment id
#[tokio::test]
async fn retry_reuses_payment_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = config(start_mock_processor().await);
    let http_client = reqwest::Client::new();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;
    let service = PaymentService::new(db, &http_client, &config);

    let first = service.checkout(client.id, booking.id).await?;
    let second = service.checkout(client.id, booking.id).await?;

    assert_eq!(first.payment.id, second.payment.id);

    Ok(())
}

/// Tests paying for an already paid booking.
///
/// Expected: Err(BadRequest) without contacting the processor
#[tokio::test]
async fn rejects_paid_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = PaymentConfig::default();
    let http_client = reqwest::Client::new();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let booking =
        factory::booking::BookingFactory::new(db, &shop.service, shop.worker.id, client.id)
            .is_paid(true)
            .build()
            .await?;

    let result = PaymentService::new(db, &http_client, &config)
        .checkout(client.id, booking.id)
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Booking is already paid"),
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}

/// Tests paying for a cancelled booking.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_cancelled_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = PaymentConfig::default();
    let http_client = reqwest::Client::new();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let booking =
        factory::booking::BookingFactory::new(db, &shop.service, shop.worker.id, client.id)
            .status("CANCELLED")
            .build()
            .await?;

    let result = PaymentService::new(db, &http_client, &config)
        .checkout(client.id, booking.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests paying at a business with online payments switched off.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_when_online_payments_disabled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = PaymentConfig::default();
    let http_client = reqwest::Client::new();

    let owner = factory::create_user_with_role(db, "BUSINESS_OWNER").await?;
    let business = factory::business::BusinessFactory::new(db, owner.id)
        .settings(r#"{"online_payments":false}"#)
        .build()
        .await?;
    let worker = factory::user::UserFactory::new(db)
        .role("WORKER")
        .business_id(Some(business.id))
        .build()
        .await?;
    let service = factory::create_service(db, business.id).await?;
    let client = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &service, worker.id, client.id).await?;

    let result = PaymentService::new(db, &http_client, &config)
        .checkout(client.id, booking.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests paying for another client's booking.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_foreign_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = PaymentConfig::default();
    let http_client = reqwest::Client::new();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;

    let result = PaymentService::new(db, &http_client, &config)
        .checkout(stranger.id, booking.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests checkout without a configured secret key.
///
/// Expected: Err(PaymentErr(NotConfigured))
#[tokio::test]
async fn fails_without_secret_key() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = PaymentConfig::default();
    let http_client = reqwest::Client::new();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;

    let result = PaymentService::new(db, &http_client, &config)
        .checkout(client.id, booking.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::PaymentErr(PaymentError::NotConfigured(_)))
    ));

    Ok(())
}

/// Tests that processor errors are surfaced with their message.
///
/// Expected: Err(PaymentErr(Processor)) with status 401
#[tokio::test]
async fn surfaces_processor_errors() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mut config = config(start_mock_processor().await);
    config.secret_key = Some("sk_wrong".to_string());
    let http_client = reqwest::Client::new();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;

    let result = PaymentService::new(db, &http_client, &config)
        .checkout(client.id, booking.id)
        .await;

    match result {
        Err(AppError::PaymentErr(PaymentError::Processor { status, message })) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid API Key provided");
        }
        other => panic!("expected processor error, got {:?}", other),
    }

    Ok(())
}
