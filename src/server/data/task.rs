//! Task data repository.
//!
//! Tasks are ordered within a Kanban column by `position`, ties broken by id.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::task::{CreateTaskParams, Task, TaskStatus, UpdateTaskParams};

pub struct TaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a `todo` task at the given position.
    pub async fn create(&self, params: CreateTaskParams, position: i32) -> Result<Task, DbErr> {
        let now = Utc::now();
        let entity = entity::task::ActiveModel {
            project_id: ActiveValue::Set(params.project_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(TaskStatus::Todo.to_string()),
            position: ActiveValue::Set(position),
            assignee_id: ActiveValue::Set(params.assignee_id),
            due_date: ActiveValue::Set(params.due_date),
            points: ActiveValue::Set(params.points),
            completed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Task::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Task>, DbErr> {
        entity::prelude::Task::find_by_id(id)
            .one(self.db)
            .await?
            .map(Task::from_entity)
            .transpose()
    }

    /// All tasks of a project ordered by status column position, then id.
    pub async fn get_by_project(&self, project_id: i32) -> Result<Vec<Task>, DbErr> {
        entity::prelude::Task::find()
            .filter(entity::task::Column::ProjectId.eq(project_id))
            .order_by_asc(entity::task::Column::Position)
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Task::from_entity)
            .collect()
    }

    /// Tasks assigned to a user, soonest due first.
    pub async fn get_by_assignee(&self, user_id: i32) -> Result<Vec<Task>, DbErr> {
        entity::prelude::Task::find()
            .filter(entity::task::Column::AssigneeId.eq(user_id))
            .order_by_asc(entity::task::Column::DueDate)
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Task::from_entity)
            .collect()
    }

    /// Position one past the bottom of a column, or 0 for an empty column.
    pub async fn next_position(&self, project_id: i32, status: TaskStatus) -> Result<i32, DbErr> {
        let last = entity::prelude::Task::find()
            .filter(entity::task::Column::ProjectId.eq(project_id))
            .filter(entity::task::Column::Status.eq(status.as_str()))
            .order_by_desc(entity::task::Column::Position)
            .one(self.db)
            .await?;

        Ok(last.map(|task| task.position + 1).unwrap_or(0))
    }

    /// Applies a partial field update.
    ///
    /// # Returns
    /// - `Ok(Some(Task))` - Updated task
    /// - `Ok(None)` - No task with that id
    pub async fn update(&self, id: i32, params: UpdateTaskParams) -> Result<Option<Task>, DbErr> {
        let Some(entity) = entity::prelude::Task::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(assignee_id) = params.assignee_id {
            active.assignee_id = ActiveValue::Set(assignee_id);
        }
        if let Some(due_date) = params.due_date {
            active.due_date = ActiveValue::Set(due_date);
        }
        if let Some(points) = params.points {
            active.points = ActiveValue::Set(points);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Task::from_entity(entity).map(Some)
    }

    /// Moves a task to a column and position, optionally stamping completion.
    pub async fn set_status(
        &self,
        id: i32,
        status: TaskStatus,
        position: i32,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<Option<Task>, DbErr> {
        let Some(entity) = entity::prelude::Task::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status.to_string());
        active.position = ActiveValue::Set(position);
        active.completed_at = ActiveValue::Set(completed_at);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Task::from_entity(entity).map(Some)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Task::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
