//! Project domain models and the Kanban board view.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::project::{BoardColumnDto, BoardDto, CreateProjectDto, ProjectDto, UpdateProjectDto},
    server::{
        error::AppError,
        model::{parse_input, require_text, task::Task, task::TaskStatus},
        util::parse::parse_stored,
    },
};

string_enum! {
    /// Archived projects stay readable but accept no new tasks.
    ProjectStatus {
        Active => "active",
        Archived => "archived",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub owner_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: self.id,
            name: self.name,
            description: self.description,
            status: self.status.to_string(),
            owner_id: self.owner_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::project::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            status: parse_stored("project.status", entity.status)?,
            owner_id: entity.owner_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateProjectParams {
    pub name: String,
    pub description: String,
    pub owner_id: i32,
}

impl CreateProjectParams {
    pub fn from_dto(owner_id: i32, dto: CreateProjectDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_text("name", dto.name)?,
            description: dto.description,
            owner_id,
        })
    }
}

/// Partial update; `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
}

impl UpdateProjectParams {
    pub fn from_dto(dto: UpdateProjectDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name.map(|n| require_text("name", n)).transpose()?,
            description: dto.description,
            status: dto.status.as_deref().map(parse_input).transpose()?,
        })
    }
}

/// Tasks of one project grouped into the Kanban columns.
#[derive(Debug, Clone)]
pub struct Board {
    pub project: Project,
    /// One entry per `TaskStatus`, in column order.
    pub columns: Vec<(TaskStatus, Vec<Task>)>,
}

impl Board {
    /// Groups tasks into columns. Tasks must already be ordered by position then id.
    pub fn from_tasks(project: Project, tasks: Vec<Task>) -> Self {
        let mut columns: Vec<(TaskStatus, Vec<Task>)> = TaskStatus::ALL
            .iter()
            .map(|status| (*status, Vec::new()))
            .collect();

        for task in tasks {
            if let Some((_, column)) = columns.iter_mut().find(|(s, _)| *s == task.status) {
                column.push(task);
            }
        }

        Self { project, columns }
    }

    pub fn into_dto(self) -> BoardDto {
        BoardDto {
            project: self.project.into_dto(),
            columns: self
                .columns
                .into_iter()
                .map(|(status, tasks)| BoardColumnDto {
                    status: status.to_string(),
                    tasks: tasks.into_iter().map(Task::into_dto).collect(),
                })
                .collect(),
        }
    }
}
