//! Issue repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::issue::{CreateIssueParams, Issue, IssueStatus, UpdateIssueParams};

pub struct IssueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IssueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Files an open issue.
    pub async fn create(&self, params: CreateIssueParams) -> Result<Issue, DbErr> {
        let now = Utc::now();
        let entity = entity::issue::ActiveModel {
            reporter_id: ActiveValue::Set(params.reporter_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(IssueStatus::Open.to_string()),
            priority: ActiveValue::Set(params.priority.to_string()),
            assignee_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Issue::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Issue>, DbErr> {
        entity::prelude::Issue::find_by_id(id)
            .one(self.db)
            .await?
            .map(Issue::from_entity)
            .transpose()
    }

    /// Issues newest first, optionally limited to one reporter or one status.
    pub async fn get_filtered(
        &self,
        reporter_id: Option<i32>,
        status: Option<IssueStatus>,
    ) -> Result<Vec<Issue>, DbErr> {
        let mut query = entity::prelude::Issue::find();
        if let Some(reporter_id) = reporter_id {
            query = query.filter(entity::issue::Column::ReporterId.eq(reporter_id));
        }
        if let Some(status) = status {
            query = query.filter(entity::issue::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_desc(entity::issue::Column::CreatedAt)
            .order_by_desc(entity::issue::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Issue::from_entity)
            .collect()
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateIssueParams,
    ) -> Result<Option<Issue>, DbErr> {
        let Some(entity) = entity::prelude::Issue::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.to_string());
        }
        if let Some(priority) = params.priority {
            active.priority = ActiveValue::Set(priority.to_string());
        }
        if let Some(assignee_id) = params.assignee_id {
            active.assignee_id = ActiveValue::Set(assignee_id);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Issue::from_entity(entity).map(Some)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Issue::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
