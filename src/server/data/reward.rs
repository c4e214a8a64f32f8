//! Reward catalogue and purchase repositories.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{column_minus, column_plus},
    model::reward::{
        CreateRewardParams, Purchase, PurchaseStatus, Reward, UpdateRewardParams,
    },
};

pub struct RewardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RewardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRewardParams) -> Result<Reward, DbErr> {
        let entity = entity::reward::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            cost: ActiveValue::Set(params.cost),
            stock: ActiveValue::Set(params.stock),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reward::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reward>, DbErr> {
        let entity = entity::prelude::Reward::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Reward::from_entity))
    }

    /// Lists rewards by cost. Inactive rewards are included only on request.
    pub async fn get_all(&self, include_inactive: bool) -> Result<Vec<Reward>, DbErr> {
        let mut query = entity::prelude::Reward::find();
        if !include_inactive {
            query = query.filter(entity::reward::Column::Active.eq(true));
        }

        let entities = query
            .order_by_asc(entity::reward::Column::Cost)
            .order_by_asc(entity::reward::Column::Id)
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(Reward::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateRewardParams,
    ) -> Result<Option<Reward>, DbErr> {
        let Some(entity) = entity::prelude::Reward::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(cost) = params.cost {
            active.cost = ActiveValue::Set(cost);
        }
        if let Some(stock) = params.stock {
            active.stock = ActiveValue::Set(stock);
        }
        if let Some(is_active) = params.active {
            active.active = ActiveValue::Set(is_active);
        }

        let entity = active.update(self.db).await?;
        Ok(Some(Reward::from_entity(entity)))
    }

    /// Takes one unit from a limited reward if any remain.
    ///
    /// # Returns
    /// - `Ok(true)` - Stock decremented
    /// - `Ok(false)` - Out of stock, unlimited, or unknown reward
    pub async fn take_stock(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reward::update_many()
            .col_expr(
                entity::reward::Column::Stock,
                column_minus(entity::reward::Column::Stock, 1),
            )
            .filter(entity::reward::Column::Id.eq(id))
            .filter(entity::reward::Column::Stock.gt(0))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Returns one unit to a limited reward. Unlimited rewards are untouched.
    pub async fn restock(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Reward::update_many()
            .col_expr(
                entity::reward::Column::Stock,
                column_plus(entity::reward::Column::Stock, 1),
            )
            .filter(entity::reward::Column::Id.eq(id))
            .filter(entity::reward::Column::Stock.is_not_null())
            .exec(self.db)
            .await?;
        Ok(())
    }
}

pub struct PurchaseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PurchaseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a pending purchase with the cost actually paid.
    pub async fn create(&self, user_id: i32, reward_id: i32, cost: i32) -> Result<Purchase, DbErr> {
        let entity = entity::purchase::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            reward_id: ActiveValue::Set(reward_id),
            cost: ActiveValue::Set(cost),
            status: ActiveValue::Set(PurchaseStatus::Pending.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            resolved_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Purchase::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Purchase>, DbErr> {
        entity::prelude::Purchase::find_by_id(id)
            .one(self.db)
            .await?
            .map(Purchase::from_entity)
            .transpose()
    }

    /// A user's purchases, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Purchase>, DbErr> {
        entity::prelude::Purchase::find()
            .filter(entity::purchase::Column::UserId.eq(user_id))
            .order_by_desc(entity::purchase::Column::CreatedAt)
            .order_by_desc(entity::purchase::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Purchase::from_entity)
            .collect()
    }

    pub async fn get_all(&self, status: Option<PurchaseStatus>) -> Result<Vec<Purchase>, DbErr> {
        let mut query = entity::prelude::Purchase::find();
        if let Some(status) = status {
            query = query.filter(entity::purchase::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_desc(entity::purchase::Column::CreatedAt)
            .order_by_desc(entity::purchase::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Purchase::from_entity)
            .collect()
    }

    /// Moves a pending purchase to `status`.
    ///
    /// # Returns
    /// - `Ok(true)` - The purchase was pending and is now resolved
    /// - `Ok(false)` - It was not pending (or does not exist); nothing changed
    pub async fn resolve(
        &self,
        id: i32,
        status: PurchaseStatus,
        resolved_at: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Purchase::update_many()
            .col_expr(entity::purchase::Column::Status, Expr::value(status.as_str()))
            .col_expr(
                entity::purchase::Column::ResolvedAt,
                Expr::value(Some(resolved_at)),
            )
            .filter(entity::purchase::Column::Id.eq(id))
            .filter(entity::purchase::Column::Status.eq(PurchaseStatus::Pending.as_str()))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
