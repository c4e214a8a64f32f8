//! Badges and badge awards.

use chrono::{DateTime, Utc};

use crate::{
    model::badge::{BadgeDto, CreateBadgeDto, UserBadgeDto},
    server::{error::AppError, model::require_text},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Badge {
    pub fn into_dto(self) -> BadgeDto {
        BadgeDto {
            id: self.id,
            name: self.name,
            description: self.description,
            icon: self.icon,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::badge::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            icon: entity.icon,
            created_at: entity.created_at,
        }
    }
}

/// A badge held by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserBadge {
    pub badge: Badge,
    pub awarded_by: Option<i32>,
    pub awarded_at: DateTime<Utc>,
}

impl UserBadge {
    pub fn into_dto(self) -> UserBadgeDto {
        UserBadgeDto {
            badge: self.badge.into_dto(),
            awarded_by: self.awarded_by,
            awarded_at: self.awarded_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBadgeParams {
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
}

impl CreateBadgeParams {
    pub fn from_dto(dto: CreateBadgeDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_text("name", dto.name)?,
            description: dto.description,
            icon: dto.icon,
        })
    }
}
