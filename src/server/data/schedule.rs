//! Schedule slot repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::schedule::{CreateScheduleParams, Schedule};

pub struct ScheduleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScheduleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateScheduleParams) -> Result<Schedule, DbErr> {
        let entity = entity::schedule::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            starts_at: ActiveValue::Set(params.starts_at),
            ends_at: ActiveValue::Set(params.ends_at),
            note: ActiveValue::Set(params.note),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Schedule::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Schedule>, DbErr> {
        let entity = entity::prelude::Schedule::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Schedule::from_entity))
    }

    /// Whether any of the user's slots intersects `[starts_at, ends_at)`.
    ///
    /// `exclude_id` skips the slot being edited.
    pub async fn has_overlap(
        &self,
        user_id: i32,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::UserId.eq(user_id))
            .filter(entity::schedule::Column::StartsAt.lt(ends_at))
            .filter(entity::schedule::Column::EndsAt.gt(starts_at));
        if let Some(id) = exclude_id {
            query = query.filter(entity::schedule::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Slots intersecting `[from, to)`, earliest first.
    pub async fn get_in_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Schedule>, DbErr> {
        let entities = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::StartsAt.lt(to))
            .filter(entity::schedule::Column::EndsAt.gt(from))
            .order_by_asc(entity::schedule::Column::StartsAt)
            .order_by_asc(entity::schedule::Column::Id)
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(Schedule::from_entity).collect())
    }

    /// A user's slots, earliest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Schedule>, DbErr> {
        let entities = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::UserId.eq(user_id))
            .order_by_asc(entity::schedule::Column::StartsAt)
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(Schedule::from_entity).collect())
    }

    /// Replaces a slot's editable fields.
    pub async fn update(
        &self,
        id: i32,
        title: String,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        note: Option<String>,
    ) -> Result<Option<Schedule>, DbErr> {
        let Some(entity) = entity::prelude::Schedule::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.title = ActiveValue::Set(title);
        active.starts_at = ActiveValue::Set(starts_at);
        active.ends_at = ActiveValue::Set(ends_at);
        active.note = ActiveValue::Set(note);

        let entity = active.update(self.db).await?;
        Ok(Some(Schedule::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Schedule::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
