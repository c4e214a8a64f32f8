//! Reward and purchase service.
//!
//! Points and stock only ever move through conditional updates inside a
//! transaction, so two concurrent redemptions cannot overdraw a balance or
//! oversell a limited reward.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        reward::{PurchaseRepository, RewardRepository},
        user::UserRepository,
    },
    error::AppError,
    model::{
        access::Feature,
        reward::{CreateRewardParams, Purchase, PurchaseStatus, Reward, UpdateRewardParams},
        user::User,
    },
    service::{ensure_self_or, notification::notify},
};

pub struct RewardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RewardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, include_inactive: bool) -> Result<Vec<Reward>, AppError> {
        Ok(RewardRepository::new(self.db).get_all(include_inactive).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Reward, AppError> {
        RewardRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reward not found".to_string()))
    }

    pub async fn create(&self, params: CreateRewardParams) -> Result<Reward, AppError> {
        Ok(RewardRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: UpdateRewardParams) -> Result<Reward, AppError> {
        RewardRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Reward not found".to_string()))
    }

    /// Archives a reward. Past purchases keep pointing at it.
    pub async fn archive(&self, id: i32) -> Result<Reward, AppError> {
        self.update(
            id,
            UpdateRewardParams {
                active: Some(false),
                ..Default::default()
            },
        )
        .await
    }

    /// Spends the user's points on a reward.
    ///
    /// # Returns
    /// - `Ok(Purchase)` - The pending purchase
    /// - `Err(AppError::NotFound)` - Unknown reward
    /// - `Err(AppError::BadRequest)` - Reward archived or out of stock, or insufficient points
    pub async fn redeem(&self, user_id: i32, reward_id: i32) -> Result<Purchase, AppError> {
        let txn = self.db.begin().await?;
        let reward_repo = RewardRepository::new(&txn);

        let Some(reward) = reward_repo.find_by_id(reward_id).await? else {
            return Err(AppError::NotFound("Reward not found".to_string()));
        };
        if !reward.active {
            return Err(AppError::BadRequest("Reward is no longer available".to_string()));
        }
        if !reward.in_stock() {
            return Err(AppError::BadRequest("Reward is out of stock".to_string()));
        }

        if !UserRepository::new(&txn)
            .deduct_points(user_id, reward.cost)
            .await?
        {
            return Err(AppError::BadRequest("Insufficient points".to_string()));
        }

        if reward.stock.is_some() && !reward_repo.take_stock(reward_id).await? {
            return Err(AppError::BadRequest("Reward is out of stock".to_string()));
        }

        let purchase = PurchaseRepository::new(&txn)
            .create(user_id, reward_id, reward.cost)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "User {} redeemed reward {} for {} points",
            user_id,
            reward_id,
            reward.cost
        );

        Ok(purchase)
    }

    pub async fn get_purchases_for_user(&self, user_id: i32) -> Result<Vec<Purchase>, AppError> {
        Ok(PurchaseRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn get_all_purchases(
        &self,
        status: Option<PurchaseStatus>,
    ) -> Result<Vec<Purchase>, AppError> {
        Ok(PurchaseRepository::new(self.db).get_all(status).await?)
    }

    /// Marks a pending purchase fulfilled and tells the buyer.
    pub async fn fulfil(&self, id: i32, now: DateTime<Utc>) -> Result<Purchase, AppError> {
        let txn = self.db.begin().await?;
        let purchase_repo = PurchaseRepository::new(&txn);

        let Some(purchase) = purchase_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Purchase not found".to_string()));
        };
        if !purchase_repo
            .resolve(id, PurchaseStatus::Fulfilled, now)
            .await?
        {
            return Err(AppError::BadRequest(
                "Only pending purchases can be fulfilled".to_string(),
            ));
        }

        notify(
            &txn,
            purchase.user_id,
            "Reward ready",
            format!("Your purchase #{} has been fulfilled.", purchase.id),
        )
        .await?;
        txn.commit().await?;

        Ok(Purchase {
            status: PurchaseStatus::Fulfilled,
            resolved_at: Some(now),
            ..purchase
        })
    }

    /// Cancels a pending purchase, refunding the cost paid and restocking.
    ///
    /// Managers may cancel any purchase; buyers only their own.
    pub async fn cancel(&self, actor: &User, id: i32, now: DateTime<Utc>) -> Result<Purchase, AppError> {
        let txn = self.db.begin().await?;
        let purchase_repo = PurchaseRepository::new(&txn);

        let Some(purchase) = purchase_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Purchase not found".to_string()));
        };
        ensure_self_or(actor, purchase.user_id, Feature::ManagePurchases)?;

        if !purchase_repo
            .resolve(id, PurchaseStatus::Cancelled, now)
            .await?
        {
            return Err(AppError::BadRequest(
                "Only pending purchases can be cancelled".to_string(),
            ));
        }

        UserRepository::new(&txn)
            .add_points(purchase.user_id, purchase.cost)
            .await?;
        RewardRepository::new(&txn).restock(purchase.reward_id).await?;

        if purchase.user_id != actor.id {
            notify(
                &txn,
                purchase.user_id,
                "Purchase cancelled",
                format!(
                    "Your purchase #{} was cancelled and {} points were refunded.",
                    purchase.id, purchase.cost
                ),
            )
            .await?;
        }
        txn.commit().await?;

        Ok(Purchase {
            status: PurchaseStatus::Cancelled,
            resolved_at: Some(now),
            ..purchase
        })
    }
}
