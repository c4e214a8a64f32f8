//! Issue factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an open, medium priority issue reported by the user.
pub async fn create_issue(
    db: &DatabaseConnection,
    reporter_id: i32,
) -> Result<entity::issue::Model, DbErr> {
    let now = Utc::now();
    entity::issue::ActiveModel {
        reporter_id: ActiveValue::Set(reporter_id),
        title: ActiveValue::Set(format!("Issue {}", next_id())),
        description: ActiveValue::Set(String::new()),
        status: ActiveValue::Set("open".to_string()),
        priority: ActiveValue::Set("medium".to_string()),
        assignee_id: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
