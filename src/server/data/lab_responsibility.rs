//! Lab responsibility (on-duty) repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::lab_responsibility::{AssignParams, LabResponsibility};

pub struct LabResponsibilityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LabResponsibilityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: AssignParams) -> Result<LabResponsibility, DbErr> {
        let entity = entity::lab_responsibility::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            starts_at: ActiveValue::Set(params.starts_at),
            ends_at: ActiveValue::Set(params.ends_at),
            note: ActiveValue::Set(params.note),
            assigned_by: ActiveValue::Set(params.assigned_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(LabResponsibility::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<LabResponsibility>, DbErr> {
        let entity = entity::prelude::LabResponsibility::find_by_id(id)
            .one(self.db)
            .await?;
        Ok(entity.map(LabResponsibility::from_entity))
    }

    /// The assignment covering `at`, if any.
    pub async fn find_current(
        &self,
        at: DateTime<Utc>,
    ) -> Result<Option<LabResponsibility>, DbErr> {
        let entity = entity::prelude::LabResponsibility::find()
            .filter(entity::lab_responsibility::Column::StartsAt.lte(at))
            .filter(entity::lab_responsibility::Column::EndsAt.gt(at))
            .order_by_desc(entity::lab_responsibility::Column::StartsAt)
            .one(self.db)
            .await?;
        Ok(entity.map(LabResponsibility::from_entity))
    }

    /// Whether any assignment intersects `[starts_at, ends_at)`.
    pub async fn has_overlap(
        &self,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let entity = entity::prelude::LabResponsibility::find()
            .filter(entity::lab_responsibility::Column::StartsAt.lt(ends_at))
            .filter(entity::lab_responsibility::Column::EndsAt.gt(starts_at))
            .one(self.db)
            .await?;
        Ok(entity.is_some())
    }

    /// Moves an assignment's end, used when handing off early.
    pub async fn set_ends_at(&self, id: i32, ends_at: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::LabResponsibility::update_many()
            .col_expr(
                entity::lab_responsibility::Column::EndsAt,
                Expr::value(ends_at),
            )
            .filter(entity::lab_responsibility::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Assignments intersecting `[from, to)`, earliest first.
    pub async fn get_in_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<LabResponsibility>, DbErr> {
        let entities = entity::prelude::LabResponsibility::find()
            .filter(entity::lab_responsibility::Column::StartsAt.lt(to))
            .filter(entity::lab_responsibility::Column::EndsAt.gt(from))
            .order_by_asc(entity::lab_responsibility::Column::StartsAt)
            .all(self.db)
            .await?;
        Ok(entities
            .into_iter()
            .map(LabResponsibility::from_entity)
            .collect())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::LabResponsibility::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
