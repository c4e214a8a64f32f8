use super::*;

/// Tests paging through users ordered by name.
///
/// Expected: first page holds 2 of 3 users in name order, total 3
#[tokio::test]
async fn pages_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "Alice", "Bob"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);
    let (first, total) = repo.get_all_paginated(0, 2).await?;
    let (second, _) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].name, "Alice");
    assert_eq!(first[1].name, "Bob");
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Charlie");

    Ok(())
}
