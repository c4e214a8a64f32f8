use super::*;

/// Tests that only pending purchases can be resolved.
///
/// Expected: first resolve succeeds, second reports false and keeps the status
#[tokio::test]
async fn resolves_pending_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reward_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let reward = factory::reward::create_reward(db).await?;
    let repo = PurchaseRepository::new(db);
    let purchase = repo.create(user.id, reward.id, reward.cost).await?;

    assert!(repo.resolve(purchase.id, PurchaseStatus::Fulfilled, Utc::now()).await?);
    assert!(!repo.resolve(purchase.id, PurchaseStatus::Cancelled, Utc::now()).await?);

    let stored = repo.find_by_id(purchase.id).await?.unwrap();
    assert_eq!(stored.status, PurchaseStatus::Fulfilled);
    assert!(stored.resolved_at.is_some());

    Ok(())
}
