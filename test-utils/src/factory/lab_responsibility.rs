//! Lab responsibility factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an on-duty assignment for a user covering `[starts_at, ends_at)`.
pub async fn create_lab_responsibility(
    db: &DatabaseConnection,
    user_id: i32,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
) -> Result<entity::lab_responsibility::Model, DbErr> {
    entity::lab_responsibility::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        starts_at: ActiveValue::Set(starts_at),
        ends_at: ActiveValue::Set(ends_at),
        note: ActiveValue::Set(None),
        assigned_by: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
