use super::*;
use crate::server::{
    model::issue::{IssueStatus, UpdateIssueParams},
    service::issue::IssueService,
};

/// Tests that volunteers only see their own issues while managers see all.
///
/// Expected: 1 issue for the reporter, 2 for the manager
#[tokio::test]
async fn list_scopes_to_reporter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Issue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reporter = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let manager = factory::user::UserFactory::new(db)
        .role("manager")
        .build()
        .await?;
    factory::issue::create_issue(db, reporter.id).await?;
    let foreign = factory::issue::create_issue(db, other.id).await?;
    let service = IssueService::new(db);

    let own = service.list(&domain(reporter.clone()), None).await?;
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].reporter_id, reporter.id);

    let all = service.list(&domain(manager), None).await?;
    assert_eq!(all.len(), 2);

    let result = service.get(&domain(reporter), foreign.id).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that the reporter hears about status changes only.
///
/// Expected: one notification after a status change, none after a priority change
#[tokio::test]
async fn status_change_notifies_reporter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .with_table(entity::prelude::Issue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reporter = factory::user::create_user(db).await?;
    let issue = factory::issue::create_issue(db, reporter.id).await?;
    let service = IssueService::new(db);

    let updated = service
        .update(
            issue.id,
            UpdateIssueParams {
                status: Some(IssueStatus::Resolved),
                priority: None,
                assignee_id: None,
            },
        )
        .await?;
    assert_eq!(updated.status, IssueStatus::Resolved);
    assert_eq!(unread(db, reporter.id).await, 1);

    service
        .update(
            issue.id,
            UpdateIssueParams {
                status: Some(IssueStatus::Resolved),
                priority: Some(crate::server::model::issue::IssuePriority::High),
                assignee_id: None,
            },
        )
        .await?;
    assert_eq!(unread(db, reporter.id).await, 1);

    Ok(())
}
