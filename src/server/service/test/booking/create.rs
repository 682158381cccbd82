use super::*;
use crate::server::data::business_client::BusinessClientRepository;

/// Tests booking a free slot inside opening hours.
///
/// Expected: Ok with a PENDING booking lasting the service duration and the client
/// recorded as a client of the business
#[tokio::test]
async fn creates_pending_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;

    let booking = BookingService::new(db)
        .create(request(&shop, client.id, tomorrow_at(10)))
        .await?;

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.end_time - booking.start_time, Duration::minutes(30));
    assert!(!booking.is_paid);

    let clients = BusinessClientRepository::new(db)
        .get_by_business(shop.business.id)
        .await?;
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].client.id, client.id);

    Ok(())
}

/// Tests that an overlapping booking for the same worker is rejected.
///
/// Expected: Err(BadRequest) with the slot message
#[tokio::test]
async fn rejects_overlapping_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;

    let result = BookingService::new(db)
        .create(request(
            &shop,
            client.id,
            tomorrow_at(10) + Duration::minutes(15),
        ))
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(msg, "The selected time slot is no longer available")
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}

/// Tests that a slot starting exactly when another ends is accepted.
///
/// Expected: Ok
#[tokio::test]
async fn allows_back_to_back_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;

    let result = BookingService::new(db)
        .create(request(
            &shop,
            client.id,
            tomorrow_at(10) + Duration::minutes(30),
        ))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a cancelled booking frees its slot.
///
/// Expected: Ok
#[tokio::test]
async fn cancelled_booking_does_not_block() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    factory::booking::BookingFactory::new(db, &shop.service, shop.worker.id, client.id)
        .status("CANCELLED")
        .build()
        .await?;

    let result = BookingService::new(db)
        .create(request(&shop, client.id, tomorrow_at(10)))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests rejecting a start time in the past.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_past_start() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;

    let result = BookingService::new(db)
        .create(request(&shop, client.id, tomorrow_at(10) - Duration::days(2)))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests rejecting a booking that ends after closing time.
///
/// Default hours are 09:00-18:00; a 30 minute service at 17:45 ends at 18:15.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_booking_past_closing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;

    let result = BookingService::new(db)
        .create(request(
            &shop,
            client.id,
            tomorrow_at(17) + Duration::minutes(45),
        ))
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(msg, "The selected time is outside business hours")
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}

/// Tests rejecting a service offered by another business.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_service_of_other_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let other = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;

    let mut req = request(&shop, client.id, tomorrow_at(10));
    req.service_id = other.service.id;

    let result = BookingService::new(db).create(req).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests rejecting an inactive service.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_inactive_service() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let retired = factory::service::ServiceFactory::new(db, shop.business.id)
        .active(false)
        .build()
        .await?;
    let client = factory::create_user(db).await?;

    let mut req = request(&shop, client.id, tomorrow_at(10));
    req.service_id = retired.id;

    let result = BookingService::new(db).create(req).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests rejecting a worker employed elsewhere and an unknown worker.
///
/// Expected: Err(BadRequest) and Err(NotFound)
#[tokio::test]
async fn rejects_foreign_or_missing_worker() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let other = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let service = BookingService::new(db);

    let mut req = request(&shop, client.id, tomorrow_at(10));
    req.worker_id = other.worker.id;
    assert!(matches!(
        service.create(req).await,
        Err(AppError::BadRequest(_))
    ));

    let mut req = request(&shop, client.id, tomorrow_at(10));
    req.worker_id = 9999;
    assert!(matches!(service.create(req).await, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests booking at an unknown business.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;

    let mut req = request(&shop, client.id, tomorrow_at(10));
    req.business_id = 9999;

    let result = BookingService::new(db).create(req).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a start time so far ahead that adding the service duration leaves chrono's range.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_start_time_at_end_of_calendar() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let start_time: chrono::DateTime<Utc> = "+262142-12-31T23:50:00Z".parse().unwrap();

    let result = BookingService::new(db)
        .create(request(&shop, client.id, start_time))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
