//! Weekly report factory.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a submitted weekly report for the user and week.
pub async fn create_weekly_report(
    db: &DatabaseConnection,
    user_id: i32,
    week_start: NaiveDate,
) -> Result<entity::weekly_report::Model, DbErr> {
    let now = Utc::now();
    entity::weekly_report::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        week_start: ActiveValue::Set(week_start),
        summary: ActiveValue::Set("Calibrated the spectrometer".to_string()),
        plans: ActiveValue::Set(None),
        blockers: ActiveValue::Set(None),
        status: ActiveValue::Set("submitted".to_string()),
        reviewer_id: ActiveValue::Set(None),
        feedback: ActiveValue::Set(None),
        reviewed_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
