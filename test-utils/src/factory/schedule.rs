//! Schedule slot factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a schedule slot for a user covering `[starts_at, ends_at)`.
pub async fn create_schedule(
    db: &DatabaseConnection,
    user_id: i32,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
) -> Result<entity::schedule::Model, DbErr> {
    entity::schedule::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        title: ActiveValue::Set("Lab shift".to_string()),
        starts_at: ActiveValue::Set(starts_at),
        ends_at: ActiveValue::Set(ends_at),
        note: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
