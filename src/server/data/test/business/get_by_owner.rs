use super::*;

/// Tests listing the businesses of one owner.
///
/// Expected: only the owner's two businesses, ordered by name
#[tokio::test]
async fn returns_owned_businesses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Business)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user_with_role(db, "BUSINESS_OWNER").await?;
    let other = factory::create_user_with_role(db, "BUSINESS_OWNER").await?;
    factory::business::BusinessFactory::new(db, owner.id)
        .name("Zeta Salon")
        .build()
        .await?;
    factory::business::BusinessFactory::new(db, owner.id)
        .name("Alpha Barbers")
        .build()
        .await?;
    factory::create_business(db, other.id).await?;

    let businesses = BusinessRepository::new(db).get_by_owner(owner.id).await?;

    let names: Vec<_> = businesses.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha Barbers", "Zeta Salon"]);

    Ok(())
}
