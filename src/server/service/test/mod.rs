use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::server::{
    data::{notification::NotificationRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::User,
};
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod badge;
mod issue;
mod lab_responsibility;
mod notification;
mod project;
mod reward;
mod schedule;
mod task;
mod user;
mod weekly_hours;
mod weekly_report;
mod work_session;

/// Fixed instant on Monday 2026-01-05 plus `hours`.
fn monday_at(hours: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap() + Duration::hours(hours)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn domain(user: entity::user::Model) -> User {
    User::from_entity(user).unwrap()
}

async fn reload(db: &sea_orm::DatabaseConnection, id: i32) -> User {
    UserRepository::new(db).find_by_id(id).await.unwrap().unwrap()
}

async fn unread(db: &sea_orm::DatabaseConnection, user_id: i32) -> u64 {
    NotificationRepository::new(db)
        .count_unread(user_id)
        .await
        .unwrap()
}
