//! Project service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{project::ProjectRepository, task::TaskRepository},
    error::AppError,
    model::project::{Board, CreateProjectParams, Project, UpdateProjectParams},
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, include_archived: bool) -> Result<Vec<Project>, AppError> {
        let repo = ProjectRepository::new(self.db);
        Ok(repo.get_all(include_archived).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Project, AppError> {
        let repo = ProjectRepository::new(self.db);
        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    pub async fn create(&self, params: CreateProjectParams) -> Result<Project, AppError> {
        let repo = ProjectRepository::new(self.db);
        Ok(repo.create(params).await?)
    }

    pub async fn update(&self, id: i32, params: UpdateProjectParams) -> Result<Project, AppError> {
        let repo = ProjectRepository::new(self.db);
        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    /// Deletes a project together with its tasks.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ProjectRepository::new(self.db);
        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Project not found".to_string()));
        }
        Ok(())
    }

    /// The project's Kanban board: one column per task status, ordered by position.
    pub async fn board(&self, id: i32) -> Result<Board, AppError> {
        let project = self.get(id).await?;
        let tasks = TaskRepository::new(self.db).get_by_project(id).await?;
        Ok(Board::from_tasks(project, tasks))
    }
}
