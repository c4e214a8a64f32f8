use super::*;
use crate::server::{
    model::weekly_report::{ReportStatus, SubmitReportParams, UpdateReportParams},
    service::weekly_report::WeeklyReportService,
};

fn submission(user_id: i32) -> SubmitReportParams {
    SubmitReportParams {
        user_id,
        week_start: None,
        summary: "Ran the PCR batch".to_string(),
        plans: None,
        blockers: None,
    }
}

/// Tests that the week defaults to the one containing `now` and may only be used once.
///
/// Expected: week of 2026-01-05, then Err(AppError::Conflict)
#[tokio::test]
async fn one_report_per_week() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .with_table(entity::prelude::WeeklyReport)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let service = WeeklyReportService::new(db);
    let thursday = monday_at(24 * 3);

    let report = service.submit(submission(user.id), thursday).await?;
    assert_eq!(report.week_start, date(2026, 1, 5));
    assert_eq!(report.status, ReportStatus::Submitted);

    let result = service.submit(submission(user.id), thursday).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that an explicit week must be a Monday.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn week_must_be_monday() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::WeeklyReport)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = WeeklyReportService::new(db)
        .submit(
            SubmitReportParams {
                week_start: Some(date(2026, 1, 6)),
                ..submission(user.id)
            },
            monday_at(0),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that review notifies the author and freezes the report.
///
/// Expected: reviewed status, one notification, later edit refused
#[tokio::test]
async fn reviewed_report_is_read_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .with_table(entity::prelude::WeeklyReport)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let reviewer = factory::user::UserFactory::new(db)
        .role("manager")
        .build()
        .await?;
    let report = factory::weekly_report::create_weekly_report(db, author.id, date(2026, 1, 5)).await?;
    let service = WeeklyReportService::new(db);

    let reviewed = service
        .review(reviewer.id, report.id, Some("Nice work".to_string()), monday_at(30))
        .await?;
    assert_eq!(reviewed.status, ReportStatus::Reviewed);
    assert_eq!(reviewed.reviewer_id, Some(reviewer.id));
    assert_eq!(unread(db, author.id).await, 1);

    let result = service
        .update(
            author.id,
            report.id,
            UpdateReportParams {
                summary: Some("Edited".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a reviewed report cannot be reviewed a second time.
///
/// Expected: Err(AppError::BadRequest), first reviewer and feedback kept, no
/// second notification
#[tokio::test]
async fn second_review_is_refused() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .with_table(entity::prelude::WeeklyReport)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let first = factory::user::UserFactory::new(db)
        .role("manager")
        .build()
        .await?;
    let second = factory::user::UserFactory::new(db)
        .role("manager")
        .build()
        .await?;
    let report = factory::weekly_report::create_weekly_report(db, author.id, date(2026, 1, 5)).await?;
    let service = WeeklyReportService::new(db);

    service
        .review(first.id, report.id, Some("Good".to_string()), monday_at(30))
        .await?;
    let result = service
        .review(second.id, report.id, Some("Redo".to_string()), monday_at(31))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let author_domain = domain(author.clone());
    let stored = service.get(&author_domain, report.id).await?;
    assert_eq!(stored.reviewer_id, Some(first.id));
    assert_eq!(stored.feedback.as_deref(), Some("Good"));
    assert_eq!(unread(db, author.id).await, 1);

    Ok(())
}
