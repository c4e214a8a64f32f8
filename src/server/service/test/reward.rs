use super::*;
use crate::server::{
    data::reward::{PurchaseRepository, RewardRepository},
    model::reward::PurchaseStatus,
    service::reward::RewardService,
};

/// Tests that redeeming spends points and limited stock.
///
/// Expected: pending purchase, 15 points left, stock 1
#[tokio::test]
async fn redeem_spends_points_and_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_reward_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).points(25).build().await?;
    let reward = factory::reward::RewardFactory::new(db)
        .cost(10)
        .stock(2)
        .build()
        .await?;

    let purchase = RewardService::new(db).redeem(user.id, reward.id).await?;

    assert_eq!(purchase.status, PurchaseStatus::Pending);
    assert_eq!(purchase.cost, 10);
    assert_eq!(reload(db, user.id).await.points, 15);
    let stored = RewardRepository::new(db).find_by_id(reward.id).await?.unwrap();
    assert_eq!(stored.stock, Some(1));

    Ok(())
}

/// Tests that a balance below the cost is refused without side effects.
///
/// Expected: Err(AppError::BadRequest), points and stock unchanged
#[tokio::test]
async fn redeem_requires_enough_points() -> Result<(), AppError> {
    let test = TestBuilder::new().with_reward_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).points(5).build().await?;
    let reward = factory::reward::RewardFactory::new(db)
        .cost(10)
        .stock(1)
        .build()
        .await?;

    let result = RewardService::new(db).redeem(user.id, reward.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(reload(db, user.id).await.points, 5);
    let stored = RewardRepository::new(db).find_by_id(reward.id).await?.unwrap();
    assert_eq!(stored.stock, Some(1));

    Ok(())
}

/// Tests that an exhausted reward cannot be redeemed.
///
/// Expected: Err(AppError::BadRequest) and no points spent
#[tokio::test]
async fn redeem_refuses_out_of_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_reward_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).points(50).build().await?;
    let reward = factory::reward::RewardFactory::new(db)
        .stock(0)
        .build()
        .await?;

    let result = RewardService::new(db).redeem(user.id, reward.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(reload(db, user.id).await.points, 50);

    Ok(())
}

/// Tests that cancelling refunds the cost paid and restocks, only once.
///
/// Expected: points and stock restored, second cancel refused
#[tokio::test]
async fn cancel_refunds_and_restocks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_reward_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let buyer = factory::user::UserFactory::new(db).points(10).build().await?;
    let manager = domain(
        factory::user::UserFactory::new(db)
            .role("manager")
            .build()
            .await?,
    );
    let reward = factory::reward::RewardFactory::new(db)
        .cost(10)
        .stock(1)
        .build()
        .await?;
    let service = RewardService::new(db);

    let purchase = service.redeem(buyer.id, reward.id).await?;
    let cancelled = service.cancel(&manager, purchase.id, monday_at(12)).await?;

    assert_eq!(cancelled.status, PurchaseStatus::Cancelled);
    assert_eq!(reload(db, buyer.id).await.points, 10);
    let stored = RewardRepository::new(db).find_by_id(reward.id).await?.unwrap();
    assert_eq!(stored.stock, Some(1));
    assert_eq!(unread(db, buyer.id).await, 1);

    let again = service.cancel(&manager, purchase.id, monday_at(13)).await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));
    assert_eq!(reload(db, buyer.id).await.points, 10);

    Ok(())
}

/// Tests that fulfilling a purchase notifies the buyer and locks it.
///
/// Expected: fulfilled with `resolved_at`, buyer notified, later cancel refused
/// without a refund
#[tokio::test]
async fn fulfil_notifies_buyer_and_blocks_cancel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_reward_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let buyer = factory::user::UserFactory::new(db).points(10).build().await?;
    let manager = domain(
        factory::user::UserFactory::new(db)
            .role("manager")
            .build()
            .await?,
    );
    let reward = factory::reward::RewardFactory::new(db)
        .cost(10)
        .build()
        .await?;
    let service = RewardService::new(db);

    let purchase = service.redeem(buyer.id, reward.id).await?;
    let fulfilled = service.fulfil(purchase.id, monday_at(12)).await?;

    assert_eq!(fulfilled.status, PurchaseStatus::Fulfilled);
    assert_eq!(fulfilled.resolved_at, Some(monday_at(12)));
    let stored = PurchaseRepository::new(db)
        .find_by_id(purchase.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, PurchaseStatus::Fulfilled);
    assert_eq!(unread(db, buyer.id).await, 1);

    let cancel = service.cancel(&manager, purchase.id, monday_at(13)).await;
    assert!(matches!(cancel, Err(AppError::BadRequest(_))));
    assert_eq!(reload(db, buyer.id).await.points, 0);

    let again = service.fulfil(purchase.id, monday_at(14)).await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));
    assert_eq!(unread(db, buyer.id).await, 1);

    Ok(())
}

/// Tests that volunteers may only cancel their own purchases.
///
/// Expected: Err(AuthError::AccessDenied) for someone else's purchase
#[tokio::test]
async fn cannot_cancel_others_purchase() -> Result<(), AppError> {
    let test = TestBuilder::new().with_reward_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let buyer = factory::user::UserFactory::new(db).points(10).build().await?;
    let stranger = domain(factory::user::create_user(db).await?);
    let reward = factory::reward::create_reward(db).await?;
    let service = RewardService::new(db);

    let purchase = service.redeem(buyer.id, reward.id).await?;
    let result = service.cancel(&stranger, purchase.id, monday_at(12)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
