use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TaskDto {
    pub id: i32,
    pub project_id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
    pub position: i32,
    pub assignee_id: Option<i32>,
    pub due_date: Option<NaiveDate>,
    pub points: i32,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateTaskDto {
    pub project_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub assignee_id: Option<i32>,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub points: i32,
}

/// Partial task update. `clear_assignee` and `clear_due_date` unset the field.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateTaskDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee_id: Option<i32>,
    #[serde(default)]
    pub clear_assignee: bool,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub clear_due_date: bool,
    pub points: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct MoveTaskDto {
    pub status: String,
    pub position: Option<i32>,
}
