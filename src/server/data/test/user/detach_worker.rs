use super::*;

/// Tests detaching a worker from their business.
///
/// Expected: Ok(true) and business_id cleared
#[tokio::test]
async fn detaches_worker() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;

    let repo = UserRepository::new(db);
    let detached = repo.detach_worker(shop.business.id, shop.worker.id).await?;

    assert!(detached);
    let worker = repo.find_by_id(shop.worker.id).await?.unwrap();
    assert!(worker.business_id.is_none());
    assert_eq!(worker.role, Role::Worker);

    Ok(())
}

/// Tests that only workers of the given business are detached.
///
/// Verifies that a worker of another business and a non-worker account are
/// left untouched.
///
/// Expected: Ok(false) for both
#[tokio::test]
async fn ignores_other_businesses_and_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let other = factory::helpers::create_business_with_dependencies(db).await?;

    let repo = UserRepository::new(db);

    assert!(!repo.detach_worker(shop.business.id, other.worker.id).await?);
    assert!(!repo.detach_worker(shop.business.id, shop.owner.id).await?);
    let worker = repo.find_by_id(other.worker.id).await?.unwrap();
    assert_eq!(worker.business_id, Some(other.business.id));

    Ok(())
}
