use super::*;
use crate::server::{data::weekly_hours::WeeklyHoursRepository, service::weekly_hours::WeeklyHoursService};

/// Tests that a reset moves positive counters into history.
///
/// Expected: one user archived, counter zero, history holds the seconds
#[tokio::test]
async fn reset_moves_counter_into_history() -> Result<(), AppError> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::user::UserFactory::new(db)
        .weekly_seconds(3600)
        .build()
        .await?;
    let idle = factory::user::create_user(db).await?;
    let week = date(2026, 1, 5);

    let summary = WeeklyHoursService::new(db)
        .reset(week, monday_at(24 * 7))
        .await?;

    assert_eq!(summary.users_archived, 1);
    assert_eq!(summary.total_seconds, 3600);
    assert_eq!(reload(db, busy.id).await.weekly_seconds, 0);

    let repo = WeeklyHoursRepository::new(db);
    let archived = repo.find(busy.id, week).await?.unwrap();
    assert_eq!(archived.seconds, 3600);
    assert!(repo.find(idle.id, week).await?.is_none());

    Ok(())
}

/// Tests that seconds credited after a reset are added to the same week on a rerun.
///
/// Expected: second run archives only the new 600 seconds, history totals 4200
#[tokio::test]
async fn rerun_adds_only_new_seconds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .weekly_seconds(3600)
        .build()
        .await?;
    let week = date(2026, 1, 5);
    let service = WeeklyHoursService::new(db);

    service.reset(week, monday_at(24 * 7)).await?;
    UserRepository::new(db).add_weekly_seconds(user.id, 600).await?;
    let second = service.reset(week, monday_at(24 * 7 + 1)).await?;

    assert_eq!(second.total_seconds, 600);
    let history = service.summary(user.id).await?;
    assert_eq!(history.current_seconds, 0);
    assert_eq!(history.history.len(), 1);
    assert_eq!(history.history[0].seconds, 4200);

    Ok(())
}

/// Tests that a reset with nothing to archive is a no-op.
///
/// Expected: zero users archived
#[tokio::test]
async fn reset_twice_is_harmless() -> Result<(), AppError> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .weekly_seconds(120)
        .build()
        .await?;
    let service = WeeklyHoursService::new(db);

    service.reset_previous_week(monday_at(24 * 7)).await?;
    let second = service.reset_previous_week(monday_at(24 * 7)).await?;

    assert_eq!(second.week_start, date(2026, 1, 5));
    assert_eq!(second.users_archived, 0);
    assert_eq!(second.total_seconds, 0);

    Ok(())
}

/// Tests that the archived week must start on a Monday.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn reset_rejects_non_monday() -> Result<(), AppError> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = WeeklyHoursService::new(db)
        .reset(date(2026, 1, 7), monday_at(0))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
