use super::*;

/// Tests paginating all businesses.
///
/// Expected: page size respected, totals cover every business
#[tokio::test]
async fn paginates_businesses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Business)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user_with_role(db, "BUSINESS_OWNER").await?;
    for _ in 0..5 {
        factory::create_business(db, owner.id).await?;
    }

    let repo = BusinessRepository::new(db);
    let page = repo.get_all_paginated(1, 2).await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 1);
    assert_eq!(page.businesses.len(), 2);

    Ok(())
}

/// Tests paginating an empty table.
///
/// Expected: no businesses and zero pages
#[tokio::test]
async fn returns_empty_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Business)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = BusinessRepository::new(db).get_all_paginated(0, 10).await?;

    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.businesses.is_empty());

    Ok(())
}
