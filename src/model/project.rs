use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::task::TaskDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ProjectDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub status: String,
    pub owner_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateProjectDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateProjectDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Kanban board: one column per task status, each ordered by position.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct BoardDto {
    pub project: ProjectDto,
    pub columns: Vec<BoardColumnDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct BoardColumnDto {
    pub status: String,
    pub tasks: Vec<TaskDto>,
}
