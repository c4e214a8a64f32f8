use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WeeklyHoursDto {
    pub week_start: NaiveDate,
    pub seconds: i64,
    pub archived_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct HoursSummaryDto {
    pub user_id: i32,
    pub current_seconds: i64,
    pub history: Vec<WeeklyHoursDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct WeeklyResetRequestDto {
    pub week_start: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WeeklyResetDto {
    pub week_start: NaiveDate,
    pub users_archived: u64,
    pub total_seconds: i64,
}
