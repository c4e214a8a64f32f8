use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct IssueDto {
    pub id: i32,
    pub reporter_id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub assignee_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateIssueDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateIssueDto {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assignee_id: Option<i32>,
    #[serde(default)]
    pub clear_assignee: bool,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IssueFilter {
    pub status: Option<String>,
}
