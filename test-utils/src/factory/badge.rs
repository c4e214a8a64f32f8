//! Badge factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a badge with a unique name.
pub async fn create_badge(db: &DatabaseConnection) -> Result<entity::badge::Model, DbErr> {
    create_badge_named(db, format!("Badge {}", next_id())).await
}

/// Creates a badge with the given name.
pub async fn create_badge_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::badge::Model, DbErr> {
    entity::badge::ActiveModel {
        name: ActiveValue::Set(name.into()),
        description: ActiveValue::Set(String::new()),
        icon: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
