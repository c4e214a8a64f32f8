//! Reward catalogue and purchase domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::reward::{CreateRewardDto, PurchaseDto, RewardDto, UpdateRewardDto},
    server::{error::AppError, model::require_text, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Reward {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Points charged per redemption. Always positive.
    pub cost: i32,
    /// Remaining units, `None` for unlimited.
    pub stock: Option<i32>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Reward {
    pub fn into_dto(self) -> RewardDto {
        RewardDto {
            id: self.id,
            name: self.name,
            description: self.description,
            cost: self.cost,
            stock: self.stock,
            active: self.active,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::reward::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            cost: entity.cost,
            stock: entity.stock,
            active: entity.active,
            created_at: entity.created_at,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock.is_none_or(|stock| stock > 0)
    }
}

fn validate_cost(cost: i32) -> Result<i32, AppError> {
    if cost <= 0 {
        return Err(AppError::BadRequest("cost must be positive".to_string()));
    }
    Ok(cost)
}

fn validate_stock(stock: i32) -> Result<i32, AppError> {
    if stock < 0 {
        return Err(AppError::BadRequest("stock must not be negative".to_string()));
    }
    Ok(stock)
}

#[derive(Debug, Clone)]
pub struct CreateRewardParams {
    pub name: String,
    pub description: String,
    pub cost: i32,
    pub stock: Option<i32>,
}

impl CreateRewardParams {
    pub fn from_dto(dto: CreateRewardDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_text("name", dto.name)?,
            description: dto.description,
            cost: validate_cost(dto.cost)?,
            stock: dto.stock.map(validate_stock).transpose()?,
        })
    }
}

/// Partial reward update; `stock: Some(None)` switches to unlimited.
#[derive(Debug, Clone, Default)]
pub struct UpdateRewardParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost: Option<i32>,
    pub stock: Option<Option<i32>>,
    pub active: Option<bool>,
}

impl UpdateRewardParams {
    pub fn from_dto(dto: UpdateRewardDto) -> Result<Self, AppError> {
        let stock = if dto.unlimited_stock {
            Some(None)
        } else {
            dto.stock.map(validate_stock).transpose()?.map(Some)
        };

        Ok(Self {
            name: dto.name.map(|n| require_text("name", n)).transpose()?,
            description: dto.description,
            cost: dto.cost.map(validate_cost).transpose()?,
            stock,
            active: dto.active,
        })
    }
}

string_enum! {
    /// Only pending purchases can change state.
    PurchaseStatus {
        Pending => "pending",
        Fulfilled => "fulfilled",
        Cancelled => "cancelled",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub id: i32,
    pub user_id: i32,
    pub reward_id: i32,
    /// Points actually paid, refunded verbatim on cancel.
    pub cost: i32,
    pub status: PurchaseStatus,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Purchase {
    pub fn into_dto(self) -> PurchaseDto {
        PurchaseDto {
            id: self.id,
            user_id: self.user_id,
            reward_id: self.reward_id,
            cost: self.cost,
            status: self.status.to_string(),
            created_at: self.created_at,
            resolved_at: self.resolved_at,
        }
    }

    pub fn from_entity(entity: entity::purchase::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            reward_id: entity.reward_id,
            cost: entity.cost,
            status: parse_stored("purchase.status", entity.status)?,
            created_at: entity.created_at,
            resolved_at: entity.resolved_at,
        })
    }
}
