//! Work session factory.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating open or closed work sessions.
///
/// Defaults to an open session started one hour ago.
pub struct WorkSessionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    task_id: Option<i32>,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl<'a> WorkSessionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            task_id: None,
            started_at: Utc::now() - Duration::hours(1),
            ended_at: None,
        }
    }

    pub fn task(mut self, task_id: i32) -> Self {
        self.task_id = Some(task_id);
        self
    }

    pub fn started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self
    }

    /// Closes the session; the duration is derived from `started_at`.
    pub fn ended_at(mut self, ended_at: DateTime<Utc>) -> Self {
        self.ended_at = Some(ended_at);
        self
    }

    pub async fn build(self) -> Result<entity::work_session::Model, DbErr> {
        let duration = self
            .ended_at
            .map(|ended| (ended - self.started_at).num_seconds().max(0));
        entity::work_session::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            task_id: ActiveValue::Set(self.task_id),
            started_at: ActiveValue::Set(self.started_at),
            ended_at: ActiveValue::Set(self.ended_at),
            duration_seconds: ActiveValue::Set(duration),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open work session for the user.
pub async fn create_work_session(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::work_session::Model, DbErr> {
    WorkSessionFactory::new(db, user_id).build().await
}
