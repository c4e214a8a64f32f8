//! Weekly report repository.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::weekly_report::{ReportStatus, UpdateReportParams, WeeklyReport};

pub struct WeeklyReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WeeklyReportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a submitted report.
    ///
    /// The `(user_id, week_start)` unique index rejects a second report for the
    /// same week.
    pub async fn create(
        &self,
        user_id: i32,
        week_start: NaiveDate,
        summary: String,
        plans: Option<String>,
        blockers: Option<String>,
    ) -> Result<WeeklyReport, DbErr> {
        let now = Utc::now();
        let entity = entity::weekly_report::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            week_start: ActiveValue::Set(week_start),
            summary: ActiveValue::Set(summary),
            plans: ActiveValue::Set(plans),
            blockers: ActiveValue::Set(blockers),
            status: ActiveValue::Set(ReportStatus::Submitted.to_string()),
            reviewer_id: ActiveValue::Set(None),
            feedback: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        WeeklyReport::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<WeeklyReport>, DbErr> {
        entity::prelude::WeeklyReport::find_by_id(id)
            .one(self.db)
            .await?
            .map(WeeklyReport::from_entity)
            .transpose()
    }

    pub async fn find_by_user_week(
        &self,
        user_id: i32,
        week_start: NaiveDate,
    ) -> Result<Option<WeeklyReport>, DbErr> {
        entity::prelude::WeeklyReport::find()
            .filter(entity::weekly_report::Column::UserId.eq(user_id))
            .filter(entity::weekly_report::Column::WeekStart.eq(week_start))
            .one(self.db)
            .await?
            .map(WeeklyReport::from_entity)
            .transpose()
    }

    /// A user's reports, newest week first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<WeeklyReport>, DbErr> {
        entity::prelude::WeeklyReport::find()
            .filter(entity::weekly_report::Column::UserId.eq(user_id))
            .order_by_desc(entity::weekly_report::Column::WeekStart)
            .all(self.db)
            .await?
            .into_iter()
            .map(WeeklyReport::from_entity)
            .collect()
    }

    /// All reports, optionally for one week, newest week first.
    pub async fn get_all(&self, week_start: Option<NaiveDate>) -> Result<Vec<WeeklyReport>, DbErr> {
        let mut query = entity::prelude::WeeklyReport::find();
        if let Some(week_start) = week_start {
            query = query.filter(entity::weekly_report::Column::WeekStart.eq(week_start));
        }

        query
            .order_by_desc(entity::weekly_report::Column::WeekStart)
            .order_by_asc(entity::weekly_report::Column::UserId)
            .all(self.db)
            .await?
            .into_iter()
            .map(WeeklyReport::from_entity)
            .collect()
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateReportParams,
    ) -> Result<Option<WeeklyReport>, DbErr> {
        let Some(entity) = entity::prelude::WeeklyReport::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(summary) = params.summary {
            active.summary = ActiveValue::Set(summary);
        }
        if let Some(plans) = params.plans {
            active.plans = ActiveValue::Set(Some(plans));
        }
        if let Some(blockers) = params.blockers {
            active.blockers = ActiveValue::Set(Some(blockers));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        WeeklyReport::from_entity(entity).map(Some)
    }

    /// Marks a report reviewed.
    pub async fn review(
        &self,
        id: i32,
        reviewer_id: i32,
        feedback: Option<String>,
        reviewed_at: DateTime<Utc>,
    ) -> Result<Option<WeeklyReport>, DbErr> {
        let Some(entity) = entity::prelude::WeeklyReport::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(ReportStatus::Reviewed.to_string());
        active.reviewer_id = ActiveValue::Set(Some(reviewer_id));
        active.feedback = ActiveValue::Set(feedback);
        active.reviewed_at = ActiveValue::Set(Some(reviewed_at));
        active.updated_at = ActiveValue::Set(reviewed_at);

        let entity = active.update(self.db).await?;
        WeeklyReport::from_entity(entity).map(Some)
    }
}
