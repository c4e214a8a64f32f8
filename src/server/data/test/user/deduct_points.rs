use super::*;

/// Tests deducting points covered by the balance.
///
/// Expected: Ok(true) and the balance reduced
#[tokio::test]
async fn deducts_when_balance_covers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).points(30).build().await?;
    let repo = UserRepository::new(db);

    assert!(repo.deduct_points(user.id, 30).await?);
    assert_eq!(repo.find_by_id(user.id).await?.unwrap().points, 0);

    Ok(())
}

/// Tests that an overdraft leaves the balance untouched.
///
/// Expected: Ok(false) and the balance unchanged
#[tokio::test]
async fn refuses_overdraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).points(9).build().await?;
    let repo = UserRepository::new(db);

    assert!(!repo.deduct_points(user.id, 10).await?);
    assert_eq!(repo.find_by_id(user.id).await?.unwrap().points, 9);

    Ok(())
}
