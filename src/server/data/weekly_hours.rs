//! Weekly hours history repository.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{data::column_plus, model::weekly_hours::WeeklyHours};

pub struct WeeklyHoursRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WeeklyHoursRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        user_id: i32,
        week_start: NaiveDate,
    ) -> Result<Option<WeeklyHours>, DbErr> {
        let entity = entity::prelude::WeeklyHours::find_by_id((user_id, week_start))
            .one(self.db)
            .await?;
        Ok(entity.map(WeeklyHours::from_entity))
    }

    /// Adds `seconds` to the history row for the week, creating it if absent.
    ///
    /// Callers run this inside the reset transaction together with the counter
    /// decrement so the two writes land or fail together.
    pub async fn add_seconds(
        &self,
        user_id: i32,
        week_start: NaiveDate,
        seconds: i64,
        archived_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let updated = entity::prelude::WeeklyHours::update_many()
            .col_expr(
                entity::weekly_hours::Column::Seconds,
                column_plus(entity::weekly_hours::Column::Seconds, seconds),
            )
            .col_expr(
                entity::weekly_hours::Column::ArchivedAt,
                Expr::value(archived_at),
            )
            .filter(entity::weekly_hours::Column::UserId.eq(user_id))
            .filter(entity::weekly_hours::Column::WeekStart.eq(week_start))
            .exec(self.db)
            .await?;

        if updated.rows_affected == 0 {
            entity::prelude::WeeklyHours::insert(entity::weekly_hours::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                week_start: ActiveValue::Set(week_start),
                seconds: ActiveValue::Set(seconds),
                archived_at: ActiveValue::Set(archived_at),
            })
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(())
    }

    /// A user's archived weeks, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<WeeklyHours>, DbErr> {
        let entities = entity::prelude::WeeklyHours::find()
            .filter(entity::weekly_hours::Column::UserId.eq(user_id))
            .order_by_desc(entity::weekly_hours::Column::WeekStart)
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(WeeklyHours::from_entity).collect())
    }
}
