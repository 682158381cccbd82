use super::*;

/// Tests paginating accounts ordered by name.
///
/// Expected: first page holds two users, totals cover all three
#[tokio::test]
async fn paginates_users_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "Alice", "Bob"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);
    let page = repo
        .get_all_paginated(GetAllUsersParam {
            page: 0,
            per_page: 2,
            role: None,
        })
        .await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    let names: Vec<_> = page.users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);

    let second = repo
        .get_all_paginated(GetAllUsersParam {
            page: 1,
            per_page: 2,
            role: None,
        })
        .await?;
    assert_eq!(second.users.len(), 1);
    assert_eq!(second.users[0].name, "Charlie");

    Ok(())
}

/// Tests filtering the listing by role.
///
/// Expected: only workers returned
#[tokio::test]
async fn filters_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user_with_role(db, "WORKER").await?;
    factory::create_user_with_role(db, "WORKER").await?;

    let repo = UserRepository::new(db);
    let page = repo
        .get_all_paginated(GetAllUsersParam {
            page: 0,
            per_page: 10,
            role: Some(Role::Worker),
        })
        .await?;

    assert_eq!(page.total, 2);
    assert!(page.users.iter().all(|u| u.role == Role::Worker));

    Ok(())
}
