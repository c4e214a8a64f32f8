//! Work session (timer) service.
//!
//! A user has at most one open session. Stopping it closes the row and adds the
//! elapsed seconds to the user's weekly counter in one transaction.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{task::TaskRepository, user::UserRepository, work_session::WorkSessionRepository},
    error::AppError,
    model::{
        total_pages,
        work_session::{elapsed_seconds, PaginatedWorkSessions, WorkSession},
    },
};

pub struct WorkSessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkSessionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts the user's timer, optionally against a task.
    ///
    /// # Returns
    /// - `Ok(WorkSession)` - The open session
    /// - `Err(AppError::Conflict)` - A session is already running
    /// - `Err(AppError::NotFound)` - The task does not exist
    pub async fn start(
        &self,
        user_id: i32,
        task_id: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<WorkSession, AppError> {
        let txn = self.db.begin().await?;
        let session_repo = WorkSessionRepository::new(&txn);

        if session_repo.find_open(user_id).await?.is_some() {
            return Err(AppError::Conflict(
                "A work session is already running".to_string(),
            ));
        }

        if let Some(task_id) = task_id {
            if TaskRepository::new(&txn).find_by_id(task_id).await?.is_none() {
                return Err(AppError::NotFound("Task not found".to_string()));
            }
        }

        let session = session_repo.create(user_id, task_id, now).await?;
        txn.commit().await?;

        Ok(session)
    }

    /// Stops the user's running timer and credits the weekly counter.
    ///
    /// # Returns
    /// - `Ok(WorkSession)` - The closed session with its duration
    /// - `Err(AppError::NotFound)` - No session is running
    pub async fn stop(&self, user_id: i32, now: DateTime<Utc>) -> Result<WorkSession, AppError> {
        let txn = self.db.begin().await?;
        let session_repo = WorkSessionRepository::new(&txn);

        let Some(open) = session_repo.find_open(user_id).await? else {
            return Err(AppError::NotFound("No work session is running".to_string()));
        };

        let duration = elapsed_seconds(open.started_at, now);
        let closed = session_repo
            .close(open.id, now, duration)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Open work session {} could not be closed", open.id))
            })?;

        UserRepository::new(&txn)
            .add_weekly_seconds(user_id, duration)
            .await?;
        txn.commit().await?;

        tracing::debug!("User {} logged {} seconds", user_id, duration);

        Ok(closed)
    }

    pub async fn active(&self, user_id: i32) -> Result<Option<WorkSession>, AppError> {
        Ok(WorkSessionRepository::new(self.db).find_open(user_id).await?)
    }

    /// A user's sessions, newest first.
    pub async fn list(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedWorkSessions, AppError> {
        let (sessions, total) = WorkSessionRepository::new(self.db)
            .get_by_user_paginated(user_id, page, per_page)
            .await?;

        Ok(PaginatedWorkSessions {
            sessions,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}
