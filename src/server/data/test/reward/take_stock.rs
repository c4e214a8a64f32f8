use super::*;

/// Tests taking the last unit of a limited reward.
///
/// Expected: first take succeeds, second fails, stock stays at 0
#[tokio::test]
async fn stops_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reward_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reward = factory::reward::RewardFactory::new(db).stock(1).build().await?;
    let repo = RewardRepository::new(db);

    assert!(repo.take_stock(reward.id).await?);
    assert!(!repo.take_stock(reward.id).await?);
    assert_eq!(repo.find_by_id(reward.id).await?.unwrap().stock, Some(0));

    Ok(())
}

/// Tests that unlimited rewards have no stock to take or return.
///
/// Expected: take reports false and stock stays unlimited after a restock
#[tokio::test]
async fn unlimited_stock_is_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reward_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reward = factory::reward::create_reward(db).await?;
    let repo = RewardRepository::new(db);

    assert!(!repo.take_stock(reward.id).await?);
    repo.restock(reward.id).await?;
    assert_eq!(repo.find_by_id(reward.id).await?.unwrap().stock, None);

    Ok(())
}
