use super::*;

/// Tests deleting an account.
///
/// Expected: Ok(true), then the account is gone and a second delete returns Ok(false)
#[tokio::test]
async fn deletes_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete(created.id).await?);
    assert!(repo.find_by_id(created.id).await?.is_none());
    assert!(!repo.delete(created.id).await?);

    Ok(())
}

/// Tests that deleting an owner cascades to their businesses.
///
/// Expected: business removed with its owner
#[tokio::test]
async fn cascades_to_owned_businesses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;

    UserRepository::new(db).delete(shop.owner.id).await?;

    let business = crate::server::data::business::BusinessRepository::new(db)
        .find_by_id(shop.business.id)
        .await?;
    assert!(business.is_none());

    Ok(())
}
