use super::*;

/// Tests scoping booking listings to a business, worker or client.
///
/// Expected: each scope only sees its own bookings
#[tokio::test]
async fn filters_by_scope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let other = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let other_client = factory::create_user(db).await?;

    factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;
    factory::booking::BookingFactory::new(db, &shop.service, shop.worker.id, other_client.id)
        .start_time(tomorrow_at(13))
        .build()
        .await?;
    factory::create_booking(db, &other.service, other.worker.id, client.id).await?;

    let repo = BookingRepository::new(db);
    let list = |scope| GetBookingsParam {
        scope,
        page: 0,
        per_page: 10,
    };

    assert_eq!(repo.get_paginated(list(BookingScope::All)).await?.total, 3);
    assert_eq!(
        repo.get_paginated(list(BookingScope::Business(shop.business.id)))
            .await?
            .total,
        2
    );
    assert_eq!(
        repo.get_paginated(list(BookingScope::Worker(other.worker.id)))
            .await?
            .total,
        1
    );
    let mine = repo
        .get_paginated(list(BookingScope::Client(client.id)))
        .await?;
    assert_eq!(mine.total, 2);
    assert!(mine.bookings.iter().all(|b| b.client_id == client.id));

    Ok(())
}

/// Tests that listings show the latest start first.
///
/// Expected: 16:00 booking before 10:00 booking
#[tokio::test]
async fn orders_latest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let early = factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;
    let late = factory::booking::BookingFactory::new(db, &shop.service, shop.worker.id, client.id)
        .start_time(tomorrow_at(16))
        .build()
        .await?;

    let page = BookingRepository::new(db)
        .get_paginated(GetBookingsParam {
            scope: BookingScope::Client(client.id),
            page: 0,
            per_page: 10,
        })
        .await?;

    let ids: Vec<_> = page.bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![late.id, early.id]);

    Ok(())
}
