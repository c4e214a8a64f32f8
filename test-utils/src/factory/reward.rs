//! Reward factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating rewards.
///
/// Defaults to an active reward costing 10 points with unlimited stock.
pub struct RewardFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    cost: i32,
    stock: Option<i32>,
    active: bool,
}

impl<'a> RewardFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Reward {}", next_id()),
            cost: 10,
            stock: None,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn cost(mut self, cost: i32) -> Self {
        self.cost = cost;
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::reward::Model, DbErr> {
        entity::reward::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(String::new()),
            cost: ActiveValue::Set(self.cost),
            stock: ActiveValue::Set(self.stock),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active reward costing 10 points.
pub async fn create_reward(db: &DatabaseConnection) -> Result<entity::reward::Model, DbErr> {
    RewardFactory::new(db).build().await
}
