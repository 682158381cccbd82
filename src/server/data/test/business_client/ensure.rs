use super::*;

/// Tests linking a client to a business once.
///
/// Expected: first call creates the link, second call is a no-op
#[tokio::test]
async fn links_client_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;

    let repo = BusinessClientRepository::new(db);

    assert!(repo.ensure(shop.business.id, client.id).await?);
    assert!(!repo.ensure(shop.business.id, client.id).await?);

    let clients = repo.get_by_business(shop.business.id).await?;
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].client.id, client.id);

    Ok(())
}

/// Tests that client lists are per business.
///
/// Expected: each business sees only its own clients
#[tokio::test]
async fn lists_clients_per_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let other = factory::helpers::create_business_with_dependencies(db).await?;
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    let repo = BusinessClientRepository::new(db);
    repo.ensure(shop.business.id, alice.id).await?;
    repo.ensure(shop.business.id, bob.id).await?;
    repo.ensure(other.business.id, bob.id).await?;

    assert_eq!(repo.get_by_business(shop.business.id).await?.len(), 2);
    let others = repo.get_by_business(other.business.id).await?;
    assert_eq!(others.len(), 1);
    assert_eq!(others[0].client.email, bob.email);

    Ok(())
}
