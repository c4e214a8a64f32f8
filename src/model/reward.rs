use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RewardDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub cost: i32,
    /// `None` means unlimited stock.
    pub stock: Option<i32>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateRewardDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cost: i32,
    pub stock: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateRewardDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost: Option<i32>,
    pub stock: Option<i32>,
    #[serde(default)]
    pub unlimited_stock: bool,
    pub active: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PurchaseDto {
    pub id: i32,
    pub user_id: i32,
    pub reward_id: i32,
    pub cost: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PurchaseFilter {
    pub status: Option<String>,
}
