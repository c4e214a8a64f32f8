//! Notification repository.
//!
//! Every query is scoped by `user_id`; a notification owned by someone else is
//! indistinguishable from a missing one.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::{CreateNotificationParams, Notification};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            body: ActiveValue::Set(params.body),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Inserts the same notification for many users.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of notifications inserted
    pub async fn create_many(
        &self,
        user_ids: &[i32],
        title: &str,
        body: &str,
    ) -> Result<u64, DbErr> {
        if user_ids.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let models = user_ids.iter().map(|user_id| entity::notification::ActiveModel {
            user_id: ActiveValue::Set(*user_id),
            title: ActiveValue::Set(title.to_string()),
            body: ActiveValue::Set(body.to_string()),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::Notification::insert_many(models)
            .exec_without_returning(self.db)
            .await?;

        Ok(user_ids.len() as u64)
    }

    /// A user's notifications, newest first.
    pub async fn get_by_user(
        &self,
        user_id: i32,
        unread_only: bool,
    ) -> Result<Vec<Notification>, DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id));
        if unread_only {
            query = query.filter(entity::notification::Column::Read.eq(false));
        }

        let entities = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    pub async fn count_unread(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .count(self.db)
            .await
    }

    /// Marks one of the user's notifications read.
    ///
    /// # Returns
    /// - `Ok(true)` - Notification exists and belongs to the user
    /// - `Ok(false)` - Not found for this user
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::Read, Expr::value(true))
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Marks every unread notification of the user read.
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::Read, Expr::value(true))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
