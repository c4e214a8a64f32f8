use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BadgeDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateBadgeDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AwardBadgeDto {
    pub user_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserBadgeDto {
    pub badge: BadgeDto,
    pub awarded_by: Option<i32>,
    pub awarded_at: DateTime<Utc>,
}
