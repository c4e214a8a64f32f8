//! Project factory for creating test project entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects.
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    status: String,
    owner_id: Option<i32>,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory for an active project named `"Project {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Project {}", next_id()),
            description: String::new(),
            status: "active".to_string(),
            owner_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status (`active` or `archived`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Builds and inserts the project entity into the database.
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        let now = Utc::now();
        entity::project::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            owner_id: ActiveValue::Set(self.owner_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active project owned by `owner_id`.
pub async fn create_project(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db).owner(owner_id).build().await
}
