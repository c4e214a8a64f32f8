//! Work session data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::work_session::WorkSession;

pub struct WorkSessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WorkSessionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Opens a session for the user.
    pub async fn create(
        &self,
        user_id: i32,
        task_id: Option<i32>,
        started_at: DateTime<Utc>,
    ) -> Result<WorkSession, DbErr> {
        let entity = entity::work_session::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            task_id: ActiveValue::Set(task_id),
            started_at: ActiveValue::Set(started_at),
            ended_at: ActiveValue::Set(None),
            duration_seconds: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(WorkSession::from_entity(entity))
    }

    /// The user's open session, if any.
    pub async fn find_open(&self, user_id: i32) -> Result<Option<WorkSession>, DbErr> {
        let entity = entity::prelude::WorkSession::find()
            .filter(entity::work_session::Column::UserId.eq(user_id))
            .filter(entity::work_session::Column::EndedAt.is_null())
            .order_by_desc(entity::work_session::Column::StartedAt)
            .one(self.db)
            .await?;

        Ok(entity.map(WorkSession::from_entity))
    }

    /// Closes a session with its computed duration.
    ///
    /// # Returns
    /// - `Ok(Some(WorkSession))` - The closed session
    /// - `Ok(None)` - No session with that id
    pub async fn close(
        &self,
        id: i32,
        ended_at: DateTime<Utc>,
        duration_seconds: i64,
    ) -> Result<Option<WorkSession>, DbErr> {
        let Some(entity) = entity::prelude::WorkSession::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.ended_at = ActiveValue::Set(Some(ended_at));
        active.duration_seconds = ActiveValue::Set(Some(duration_seconds));

        let entity = active.update(self.db).await?;
        Ok(Some(WorkSession::from_entity(entity)))
    }

    /// A user's sessions, newest first.
    ///
    /// # Returns
    /// - `Ok((sessions, total))` - Sessions for the page and total session count
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<WorkSession>, u64), DbErr> {
        let paginator = entity::prelude::WorkSession::find()
            .filter(entity::work_session::Column::UserId.eq(user_id))
            .order_by_desc(entity::work_session::Column::StartedAt)
            .order_by_desc(entity::work_session::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let sessions = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(WorkSession::from_entity)
            .collect();

        Ok((sessions, total))
    }
}
