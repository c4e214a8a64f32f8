use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WeeklyReportDto {
    pub id: i32,
    pub user_id: i32,
    pub week_start: NaiveDate,
    pub summary: String,
    pub plans: Option<String>,
    pub blockers: Option<String>,
    pub status: String,
    pub reviewer_id: Option<i32>,
    pub feedback: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SubmitWeeklyReportDto {
    pub week_start: Option<NaiveDate>,
    pub summary: String,
    pub plans: Option<String>,
    pub blockers: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateWeeklyReportDto {
    pub summary: Option<String>,
    pub plans: Option<String>,
    pub blockers: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ReviewWeeklyReportDto {
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeeklyReportFilter {
    pub week_start: Option<NaiveDate>,
}
