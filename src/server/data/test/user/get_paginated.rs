use super::*;

fn params(query: ListQuery) -> ListParams {
    query.into_params()
}

/// Tests searching on account.
///
/// Verifies that the search is a substring match and the total counts only matches.
///
/// Expected: Ok with the two matching users and total 2
#[tokio::test]
async fn filters_by_account_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for account in ["alice@shop.test", "bob@shop.test", "carol@other.test"] {
        factory::user::UserFactory::new(db)
            .account(account)
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_paginated(&params(ListQuery {
            search: Some("shop".to_string()),
            sort_by: Some("account".to_string()),
            sort_order: Some("1".to_string()),
            ..Default::default()
        }))
        .await?;

    let accounts: Vec<_> = users.iter().map(|u| u.account.as_str()).collect();
    assert_eq!(accounts, vec!["alice@shop.test", "bob@shop.test"]);
    assert_eq!(total, 2);

    Ok(())
}

/// Tests paging.
///
/// Expected: Ok with one user on page 2 of size 2, total 3
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for account in ["a@x.test", "b@x.test", "c@x.test"] {
        factory::user::UserFactory::new(db)
            .account(account)
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_paginated(&params(ListQuery {
            sort_by: Some("account".to_string()),
            sort_order: Some("1".to_string()),
            items_per_page: Some("2".to_string()),
            page: Some("2".to_string()),
            ..Default::default()
        }))
        .await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].account, "c@x.test");
    assert_eq!(total, 3);

    Ok(())
}

/// Tests that `itemsPerPage=-1` returns every row.
///
/// Expected: Ok with all users
#[tokio::test]
async fn negative_page_size_returns_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..25 {
        factory::user::create_user(db).await?;
    }

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_paginated(&params(ListQuery {
            items_per_page: Some("-1".to_string()),
            ..Default::default()
        }))
        .await?;

    assert_eq!(users.len(), 25);
    assert_eq!(total, 25);

    Ok(())
}

/// Tests the default sort: newest first, ties broken by ID.
///
/// Expected: Ok with users in descending creation order
#[tokio::test]
async fn defaults_to_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (users, _) = repo.get_paginated(&ListParams::default()).await?;

    let ids: Vec<_> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
