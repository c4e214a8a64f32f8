//! Project data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::project::{
    CreateProjectParams, Project, ProjectStatus, UpdateProjectParams,
};

pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an active project.
    pub async fn create(&self, params: CreateProjectParams) -> Result<Project, DbErr> {
        let now = Utc::now();
        let entity = entity::project::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(ProjectStatus::Active.to_string()),
            owner_id: ActiveValue::Set(Some(params.owner_id)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Project::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Project>, DbErr> {
        entity::prelude::Project::find_by_id(id)
            .one(self.db)
            .await?
            .map(Project::from_entity)
            .transpose()
    }

    /// Lists projects by name. Archived projects are included only on request.
    pub async fn get_all(&self, include_archived: bool) -> Result<Vec<Project>, DbErr> {
        let mut query = entity::prelude::Project::find();
        if !include_archived {
            query = query
                .filter(entity::project::Column::Status.eq(ProjectStatus::Active.as_str()));
        }

        query
            .order_by_asc(entity::project::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Project::from_entity)
            .collect()
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - Updated project
    /// - `Ok(None)` - No project with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProjectParams,
    ) -> Result<Option<Project>, DbErr> {
        let Some(entity) = entity::prelude::Project::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.to_string());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Project::from_entity(entity).map(Some)
    }

    /// Deletes a project. Its tasks are removed by the foreign key cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Project::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
