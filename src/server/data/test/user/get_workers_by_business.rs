use super::*;

/// Tests listing the workers of a business.
///
/// Verifies that only WORKER accounts attached to the business are returned.
///
/// Expected: Ok with exactly the two workers of the business
#[tokio::test]
async fn returns_only_workers_of_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let second = factory::user::UserFactory::new(db)
        .role("WORKER")
        .business_id(Some(shop.business.id))
        .build()
        .await?;
    factory::helpers::create_business_with_dependencies(db).await?;

    let workers = UserRepository::new(db)
        .get_workers_by_business(shop.business.id)
        .await?;

    let mut ids: Vec<_> = workers.iter().map(|w| w.id).collect();
    ids.sort();
    assert_eq!(ids, vec![shop.worker.id, second.id]);

    Ok(())
}
