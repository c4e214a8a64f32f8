use super::*;

/// Tests that subtracting keeps seconds added after the amount was read.
///
/// Expected: 100 seconds remain after subtracting 3600 from 3700
#[tokio::test]
async fn keeps_later_seconds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .weekly_seconds(3600)
        .build()
        .await?;
    let repo = UserRepository::new(db);

    repo.add_weekly_seconds(user.id, 100).await?;
    assert!(repo.subtract_weekly_seconds(user.id, 3600).await?);

    assert_eq!(repo.find_by_id(user.id).await?.unwrap().weekly_seconds, 100);

    Ok(())
}

/// Tests that the counter never goes negative.
///
/// Expected: Ok(false) and the counter unchanged
#[tokio::test]
async fn refuses_to_go_negative() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .weekly_seconds(50)
        .build()
        .await?;
    let repo = UserRepository::new(db);

    assert!(!repo.subtract_weekly_seconds(user.id, 60).await?);
    assert_eq!(repo.find_by_id(user.id).await?.unwrap().weekly_seconds, 50);

    Ok(())
}
