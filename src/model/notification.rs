use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Sends to one user, or to every approved user when `user_id` is omitted.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SendNotificationDto {
    pub user_id: Option<i32>,
    pub title: String,
    pub body: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UnreadCountDto {
    pub unread: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SentCountDto {
    pub sent: u64,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NotificationFilter {
    #[serde(default)]
    pub unread_only: bool,
}
