//! Notification factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unread notification for the user.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    entity::notification::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        title: ActiveValue::Set("Heads up".to_string()),
        body: ActiveValue::Set("Something happened".to_string()),
        read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
