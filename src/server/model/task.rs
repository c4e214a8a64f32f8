//! Task domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::task::{CreateTaskDto, MoveTaskDto, TaskDto, UpdateTaskDto},
    server::{
        error::AppError,
        model::{parse_input, require_text},
        util::parse::parse_stored,
    },
};

string_enum! {
    /// Kanban column, in board order.
    TaskStatus {
        Todo => "todo",
        InProgress => "in_progress",
        Review => "review",
        Done => "done",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub project_id: i32,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// Order within the status column, ascending.
    pub position: i32,
    pub assignee_id: Option<i32>,
    pub due_date: Option<NaiveDate>,
    /// Points awarded to the assignee on first completion.
    pub points: i32,
    /// Set on the first transition into `done` and never cleared.
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            project_id: self.project_id,
            title: self.title,
            description: self.description,
            status: self.status.to_string(),
            position: self.position,
            assignee_id: self.assignee_id,
            due_date: self.due_date,
            points: self.points,
            completed_at: self.completed_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::task::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            project_id: entity.project_id,
            title: entity.title,
            description: entity.description,
            status: parse_stored("task.status", entity.status)?,
            position: entity.position,
            assignee_id: entity.assignee_id,
            due_date: entity.due_date,
            points: entity.points,
            completed_at: entity.completed_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateTaskParams {
    pub project_id: i32,
    pub title: String,
    pub description: String,
    pub assignee_id: Option<i32>,
    pub due_date: Option<NaiveDate>,
    pub points: i32,
}

impl CreateTaskParams {
    pub fn from_dto(dto: CreateTaskDto) -> Result<Self, AppError> {
        if dto.points < 0 {
            return Err(AppError::BadRequest("points must not be negative".to_string()));
        }
        Ok(Self {
            project_id: dto.project_id,
            title: require_text("title", dto.title)?,
            description: dto.description,
            assignee_id: dto.assignee_id,
            due_date: dto.due_date,
            points: dto.points,
        })
    }
}

/// Partial task update.
///
/// The doubly optional fields distinguish "leave unchanged" (`None`) from
/// "clear" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee_id: Option<Option<i32>>,
    pub due_date: Option<Option<NaiveDate>>,
    pub points: Option<i32>,
}

impl UpdateTaskParams {
    pub fn from_dto(dto: UpdateTaskDto) -> Result<Self, AppError> {
        if dto.points.is_some_and(|p| p < 0) {
            return Err(AppError::BadRequest("points must not be negative".to_string()));
        }
        let assignee_id = if dto.clear_assignee {
            Some(None)
        } else {
            dto.assignee_id.map(Some)
        };
        let due_date = if dto.clear_due_date {
            Some(None)
        } else {
            dto.due_date.map(Some)
        };

        Ok(Self {
            title: dto.title.map(|t| require_text("title", t)).transpose()?,
            description: dto.description,
            assignee_id,
            due_date,
            points: dto.points,
        })
    }
}

/// Target column and optional position for a board move.
#[derive(Debug, Clone)]
pub struct MoveTaskParams {
    pub status: TaskStatus,
    /// `None` appends to the bottom of the target column.
    pub position: Option<i32>,
}

impl MoveTaskParams {
    pub fn from_dto(dto: MoveTaskDto) -> Result<Self, AppError> {
        if dto.position.is_some_and(|p| p < 0) {
            return Err(AppError::BadRequest("position must not be negative".to_string()));
        }
        Ok(Self {
            status: parse_input(&dto.status)?,
            position: dto.position,
        })
    }
}
