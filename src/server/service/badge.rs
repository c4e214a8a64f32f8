//! Badge service.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{badge::BadgeRepository, user::UserRepository},
    error::AppError,
    model::badge::{Badge, CreateBadgeParams, UserBadge},
    service::notification::notify,
};

pub struct BadgeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BadgeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Badge>, AppError> {
        Ok(BadgeRepository::new(self.db).get_all().await?)
    }

    /// Creates a badge. Names are unique.
    pub async fn create(&self, params: CreateBadgeParams) -> Result<Badge, AppError> {
        let repo = BadgeRepository::new(self.db);
        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "A badge named '{}' already exists",
                params.name
            )));
        }
        let name = params.name.clone();
        repo.create(params).await.map_err(|err| {
            AppError::conflict_on_unique(err, format!("A badge named '{}' already exists", name))
        })
    }

    /// Deletes a badge and every award of it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !BadgeRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Badge not found".to_string()));
        }
        Ok(())
    }

    /// Awards a badge to a user and notifies them.
    ///
    /// # Returns
    /// - `Ok(())` - Awarded
    /// - `Err(AppError::NotFound)` - Unknown badge or user
    /// - `Err(AppError::Conflict)` - The user already holds the badge
    pub async fn award(
        &self,
        actor_id: i32,
        badge_id: i32,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let badge_repo = BadgeRepository::new(&txn);

        let Some(badge) = badge_repo.find_by_id(badge_id).await? else {
            return Err(AppError::NotFound("Badge not found".to_string()));
        };
        if UserRepository::new(&txn).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if badge_repo.award_exists(user_id, badge_id).await? {
            return Err(AppError::Conflict(
                "User already holds this badge".to_string(),
            ));
        }

        badge_repo
            .award(user_id, badge_id, Some(actor_id), now)
            .await
            .map_err(|err| AppError::conflict_on_unique(err, "User already holds this badge"))?;
        notify(
            &txn,
            user_id,
            "Badge awarded",
            format!("You earned the \"{}\" badge.", badge.name),
        )
        .await?;
        txn.commit().await?;

        Ok(())
    }

    pub async fn revoke(&self, badge_id: i32, user_id: i32) -> Result<(), AppError> {
        if !BadgeRepository::new(self.db).revoke(user_id, badge_id).await? {
            return Err(AppError::NotFound(
                "User does not hold this badge".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<UserBadge>, AppError> {
        Ok(BadgeRepository::new(self.db).get_by_user(user_id).await?)
    }
}
