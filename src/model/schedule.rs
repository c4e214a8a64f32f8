use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ScheduleDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Slot creation; `user_id` defaults to the caller.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateScheduleDto {
    pub user_id: Option<i32>,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateScheduleDto {
    pub title: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    /// Omit to keep the note. An empty string clears it.
    pub note: Option<String>,
}

/// Half-open time window `[from, to)`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimeRangeParams {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}
