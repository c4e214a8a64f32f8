use super::*;
use crate::server::{
    model::lab_responsibility::{AssignParams, HandoffParams},
    service::lab_responsibility::LabResponsibilityService,
};

async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .with_table(entity::prelude::LabResponsibility)
        .build()
        .await
        .unwrap()
}

/// Tests that assignments may not overlap.
///
/// Expected: 8-16 succeeds, 15-20 conflicts, 16-20 succeeds
#[tokio::test]
async fn assignments_do_not_overlap() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    let service = LabResponsibilityService::new(db);
    let assign = |user_id: i32, from: i64, to: i64| AssignParams {
        user_id,
        starts_at: monday_at(from),
        ends_at: monday_at(to),
        note: None,
        assigned_by: None,
    };

    service.assign(assign(first.id, 8, 16)).await?;
    let result = service.assign(assign(second.id, 15, 20)).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    service.assign(assign(second.id, 16, 20)).await?;
    assert_eq!(unread(db, first.id).await, 1);
    assert_eq!(unread(db, second.id).await, 1);

    Ok(())
}

/// Tests that pending users cannot be put on duty.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn assignee_must_be_approved() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let pending = factory::user::UserFactory::new(db)
        .status("pending")
        .build()
        .await?;

    let result = LabResponsibilityService::new(db)
        .assign(AssignParams {
            user_id: pending.id,
            starts_at: monday_at(8),
            ends_at: monday_at(16),
            note: None,
            assigned_by: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a hand-off splits the current assignment at `now`.
///
/// Expected: old one ends at 12:00, new one runs 12:00-16:00, both notified
#[tokio::test]
async fn handoff_splits_current_assignment() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let holder = factory::user::create_user(db).await?;
    let target = factory::user::create_user(db).await?;
    factory::lab_responsibility::create_lab_responsibility(
        db,
        holder.id,
        monday_at(8),
        monday_at(16),
    )
    .await?;
    let service = LabResponsibilityService::new(db);

    let result = service
        .handoff(
            &domain(holder.clone()),
            HandoffParams {
                to_user_id: target.id,
                note: Some("Leaving early".to_string()),
                handed_by: holder.id,
            },
            monday_at(12),
        )
        .await?;

    let previous = result.previous.unwrap();
    assert_eq!(previous.user_id, holder.id);
    assert_eq!(previous.ends_at, monday_at(12));
    assert_eq!(result.current.user_id, target.id);
    assert_eq!(result.current.starts_at, monday_at(12));
    assert_eq!(result.current.ends_at, monday_at(16));

    let on_duty = service.current(monday_at(13)).await?.unwrap();
    assert_eq!(on_duty.user_id, target.id);
    assert_eq!(unread(db, holder.id).await, 1);
    assert_eq!(unread(db, target.id).await, 1);

    Ok(())
}

/// Tests a hand-off at the instant the current assignment starts.
///
/// Expected: the old assignment is removed rather than left as an empty range
#[tokio::test]
async fn handoff_at_start_replaces_assignment() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let holder = factory::user::create_user(db).await?;
    let target = factory::user::create_user(db).await?;
    factory::lab_responsibility::create_lab_responsibility(
        db,
        holder.id,
        monday_at(8),
        monday_at(16),
    )
    .await?;
    let service = LabResponsibilityService::new(db);

    let result = service
        .handoff(
            &domain(holder.clone()),
            HandoffParams {
                to_user_id: target.id,
                note: None,
                handed_by: holder.id,
            },
            monday_at(8),
        )
        .await?;

    assert!(result.previous.is_none());
    assert_eq!(result.current.starts_at, monday_at(8));
    assert_eq!(result.current.ends_at, monday_at(16));

    let rows = service.get_in_range(monday_at(0), monday_at(24)).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, target.id);
    assert!(rows.iter().all(|row| row.ends_at > row.starts_at));

    Ok(())
}

/// Tests that only the holder or a manager may hand off, and never to the holder.
///
/// Expected: AccessDenied for a bystander, BadRequest for a self hand-off
#[tokio::test]
async fn handoff_checks_actor_and_target() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let holder = factory::user::create_user(db).await?;
    let bystander = factory::user::create_user(db).await?;
    let manager = factory::user::UserFactory::new(db)
        .role("manager")
        .build()
        .await?;
    factory::lab_responsibility::create_lab_responsibility(
        db,
        holder.id,
        monday_at(8),
        monday_at(16),
    )
    .await?;
    let service = LabResponsibilityService::new(db);

    let denied = service
        .handoff(
            &domain(bystander.clone()),
            HandoffParams {
                to_user_id: bystander.id,
                note: None,
                handed_by: bystander.id,
            },
            monday_at(12),
        )
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let to_self = service
        .handoff(
            &domain(manager.clone()),
            HandoffParams {
                to_user_id: holder.id,
                note: None,
                handed_by: manager.id,
            },
            monday_at(12),
        )
        .await;
    assert!(matches!(to_self, Err(AppError::BadRequest(_))));

    Ok(())
}
