use super::*;

/// Tests detecting a partially overlapping booking.
///
/// Existing booking 10:00-10:30; requested 10:15-10:45.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_partial_overlap() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;

    let start = tomorrow_at(10) + Duration::minutes(15);
    let conflict = BookingRepository::new(db)
        .has_conflict(shop.worker.id, start, start + Duration::minutes(30))
        .await?;

    assert!(conflict);

    Ok(())
}

/// Tests detecting a request that fully contains an existing booking.
///
/// Existing booking 10:00-10:30; requested 09:00-12:00.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_containing_interval() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;

    let conflict = BookingRepository::new(db)
        .has_conflict(shop.worker.id, tomorrow_at(9), tomorrow_at(12))
        .await?;

    assert!(conflict);

    Ok(())
}

/// Tests that back-to-back bookings do not conflict.
///
/// Existing booking 10:00-10:30; requested 10:30-11:00 and 09:30-10:00.
///
/// Expected: Ok(false) for both
#[tokio::test]
async fn allows_adjacent_intervals() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;

    let repo = BookingRepository::new(db);
    let end = tomorrow_at(10) + Duration::minutes(30);

    assert!(!repo
        .has_conflict(shop.worker.id, end, end + Duration::minutes(30))
        .await?);
    assert!(!repo
        .has_conflict(
            shop.worker.id,
            tomorrow_at(10) - Duration::minutes(30),
            tomorrow_at(10)
        )
        .await?);

    Ok(())
}

/// Tests that cancelled bookings free their slot.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_cancelled_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    factory::booking::BookingFactory::new(db, &shop.service, shop.worker.id, client.id)
        .status("CANCELLED")
        .build()
        .await?;

    let conflict = BookingRepository::new(db)
        .has_conflict(
            shop.worker.id,
            tomorrow_at(10),
            tomorrow_at(10) + Duration::minutes(30),
        )
        .await?;

    assert!(!conflict);

    Ok(())
}

/// Tests that another worker's bookings do not block the slot.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_other_workers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let colleague = factory::user::UserFactory::new(db)
        .role("WORKER")
        .business_id(Some(shop.business.id))
        .build()
        .await?;
    let client = factory::create_user(db).await?;
    factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;

    let conflict = BookingRepository::new(db)
        .has_conflict(
            colleague.id,
            tomorrow_at(10),
            tomorrow_at(10) + Duration::minutes(30),
        )
        .await?;

    assert!(!conflict);

    Ok(())
}
