use super::*;

/// Tests that only approved admins count.
///
/// Expected: false with a pending admin, true once an approved admin exists
#[tokio::test]
async fn counts_only_approved_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    factory::user::UserFactory::new(db)
        .role("admin")
        .status("pending")
        .build()
        .await?;
    assert!(!repo.admin_exists().await?);

    factory::user::create_admin(db).await?;
    assert!(repo.admin_exists().await?);
    assert_eq!(repo.count_admins().await?, 1);

    Ok(())
}
