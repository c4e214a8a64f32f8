use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LabResponsibilityDto {
    pub id: i32,
    pub user_id: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub note: Option<String>,
    pub assigned_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AssignLabResponsibilityDto {
    pub user_id: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct HandoffDto {
    pub to_user_id: i32,
    pub note: Option<String>,
}

/// Result of a hand-off: the closed assignment and the one replacing it.
///
/// `previous` is absent when the hand-off happened at the instant the old
/// assignment started, in which case that assignment was removed.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct HandoffResultDto {
    pub previous: Option<LabResponsibilityDto>,
    pub current: LabResponsibilityDto,
}
