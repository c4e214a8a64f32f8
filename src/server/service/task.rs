//! Task service.
//!
//! Board moves are the interesting part: the first time a task lands in the done
//! column it is stamped complete and its points go to the assignee, in the same
//! transaction as the move. A completed task keeps its stamp when moved back out,
//! so moving it into done again awards nothing.

use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{project::ProjectRepository, task::TaskRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        access::{permits, Feature},
        project::ProjectStatus,
        task::{CreateTaskParams, MoveTaskParams, Task, TaskStatus, UpdateTaskParams},
        user::User,
    },
    service::notification::notify,
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<Task, AppError> {
        TaskRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))
    }

    /// Tasks assigned to the user across all projects.
    pub async fn get_assigned(&self, user_id: i32) -> Result<Vec<Task>, AppError> {
        Ok(TaskRepository::new(self.db).get_by_assignee(user_id).await?)
    }

    /// Creates a task at the bottom of the project's todo column.
    ///
    /// # Returns
    /// - `Ok(Task)` - The created task
    /// - `Err(AppError::NotFound)` - Project does not exist
    /// - `Err(AppError::BadRequest)` - Project archived, or assignee not an approved user
    pub async fn create(&self, params: CreateTaskParams) -> Result<Task, AppError> {
        let txn = self.db.begin().await?;

        let Some(project) = ProjectRepository::new(&txn)
            .find_by_id(params.project_id)
            .await?
        else {
            return Err(AppError::NotFound("Project not found".to_string()));
        };
        if project.status != ProjectStatus::Active {
            return Err(AppError::BadRequest(
                "Tasks cannot be added to an archived project".to_string(),
            ));
        }

        if let Some(assignee_id) = params.assignee_id {
            ensure_assignable(&txn, assignee_id).await?;
        }

        let task_repo = TaskRepository::new(&txn);
        let position = task_repo
            .next_position(params.project_id, TaskStatus::Todo)
            .await?;
        let task = task_repo.create(params, position).await?;
        txn.commit().await?;

        Ok(task)
    }

    pub async fn update(&self, id: i32, params: UpdateTaskParams) -> Result<Task, AppError> {
        if let Some(Some(assignee_id)) = params.assignee_id {
            ensure_assignable(self.db, assignee_id).await?;
        }

        TaskRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))
    }

    /// Moves a task on the board.
    ///
    /// Staff may move any task; everyone else only tasks assigned to them.
    /// Without an explicit position the task goes to the bottom of the target
    /// column, or stays where it is when the column does not change.
    ///
    /// # Returns
    /// - `Ok(Task)` - The moved task
    /// - `Err(AppError::NotFound)` - No task with that id
    /// - `Err(AuthError::AccessDenied)` - Actor may not move this task
    pub async fn move_task(
        &self,
        actor: &User,
        id: i32,
        params: MoveTaskParams,
        now: DateTime<Utc>,
    ) -> Result<Task, AppError> {
        let txn = self.db.begin().await?;
        let task_repo = TaskRepository::new(&txn);

        let Some(task) = task_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Task not found".to_string()));
        };

        if !permits(actor.role, Feature::ManageTasks) && task.assignee_id != Some(actor.id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("User may only move tasks assigned to them, not task {}", id),
            )
            .into());
        }

        let position = match params.position {
            Some(position) => position,
            None if params.status == task.status => task.position,
            None => task_repo.next_position(task.project_id, params.status).await?,
        };

        let first_completion = params.status == TaskStatus::Done && task.completed_at.is_none();
        let completed_at = if first_completion {
            Some(now)
        } else {
            task.completed_at
        };

        let moved = task_repo
            .set_status(id, params.status, position, completed_at)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

        if first_completion {
            if let Some(assignee_id) = moved.assignee_id {
                if moved.points > 0 {
                    UserRepository::new(&txn)
                        .add_points(assignee_id, moved.points)
                        .await?;
                }
                notify(
                    &txn,
                    assignee_id,
                    "Task completed",
                    format!(
                        "\"{}\" is done. You earned {} points.",
                        moved.title, moved.points
                    ),
                )
                .await?;
            }
        }

        txn.commit().await?;

        if first_completion {
            tracing::info!(
                "Task {} completed, awarded {} points to {:?}",
                moved.id,
                moved.points,
                moved.assignee_id
            );
        }

        Ok(moved)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TaskRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Task not found".to_string()));
        }
        Ok(())
    }
}

/// Tasks may only be assigned to approved accounts.
async fn ensure_assignable<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<(), AppError> {
    match UserRepository::new(db).find_by_id(user_id).await? {
        Some(user) if user.is_approved() => Ok(()),
        Some(_) => Err(AppError::BadRequest(
            "Tasks can only be assigned to approved users".to_string(),
        )),
        None => Err(AppError::NotFound("Assignee not found".to_string())),
    }
}
