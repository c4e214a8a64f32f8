use super::*;
use crate::server::service::work_session::WorkSessionService;

/// Tests that a second start while a timer runs is refused.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn start_twice_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let service = WorkSessionService::new(db);

    service.start(user.id, None, monday_at(9)).await?;
    let result = service.start(user.id, None, monday_at(10)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that starting against a missing task fails.
///
/// Expected: Err(AppError::NotFound) and no open session
#[tokio::test]
async fn start_rejects_unknown_task() -> Result<(), AppError> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let service = WorkSessionService::new(db);

    let result = service.start(user.id, Some(999), monday_at(9)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(service.active(user.id).await?.is_none());

    Ok(())
}

/// Tests that stopping closes the session and credits the weekly counter.
///
/// Expected: 90 minute session and 5400 seconds on the counter
#[tokio::test]
async fn stop_credits_weekly_counter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, task) = factory::helpers::create_task_with_dependencies(db).await?;
    let service = WorkSessionService::new(db);

    service.start(user.id, Some(task.id), monday_at(9)).await?;
    let stopped = service
        .stop(user.id, monday_at(9) + Duration::minutes(90))
        .await?;

    assert!(!stopped.is_open());
    assert_eq!(stopped.duration_seconds, Some(5400));
    assert_eq!(reload(db, user.id).await.weekly_seconds, 5400);
    assert!(service.active(user.id).await?.is_none());

    Ok(())
}

/// Tests that stopping with no running timer fails.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn stop_without_session_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = WorkSessionService::new(db).stop(user.id, monday_at(9)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
