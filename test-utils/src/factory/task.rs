//! Task factory for creating test task entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tasks.
///
/// Defaults to an unassigned `todo` task at position 0 worth no points.
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    project_id: i32,
    title: String,
    status: String,
    position: i32,
    assignee_id: Option<i32>,
    due_date: Option<NaiveDate>,
    points: i32,
}

impl<'a> TaskFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, project_id: i32) -> Self {
        Self {
            db,
            project_id,
            title: format!("Task {}", next_id()),
            status: "todo".to_string(),
            position: 0,
            assignee_id: None,
            due_date: None,
            points: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the Kanban status (`todo`, `in_progress`, `review` or `done`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn assignee(mut self, assignee_id: i32) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    /// Builds and inserts the task entity into the database.
    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        let now = Utc::now();
        let completed_at = (self.status == "done").then_some(now);
        entity::task::ActiveModel {
            project_id: ActiveValue::Set(self.project_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(String::new()),
            status: ActiveValue::Set(self.status),
            position: ActiveValue::Set(self.position),
            assignee_id: ActiveValue::Set(self.assignee_id),
            due_date: ActiveValue::Set(self.due_date),
            points: ActiveValue::Set(self.points),
            completed_at: ActiveValue::Set(completed_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default task in the given project.
pub async fn create_task(
    db: &DatabaseConnection,
    project_id: i32,
) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db, project_id).build().await
}
