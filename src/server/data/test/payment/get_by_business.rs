use super::*;

/// Tests listing payments of one business.
///
/// Expected: only the payment made for the business's booking
#[tokio::test]
async fn returns_payments_of_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (shop, booking) = booked_shop(db).await?;
    let (_, other_booking) = booked_shop(db).await?;
    let mine = factory::create_payment(db, booking.id).await?;
    factory::create_payment(db, other_booking.id).await?;

    let repo = PaymentRepository::new(db);
    let payments = repo.get_by_business(shop.business.id).await?;

    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].id, mine.id);

    let all = repo.get_all_paginated(0, 10).await?;
    assert_eq!(all.total, 2);

    Ok(())
}
