use super::*;
use crate::server::service::notification::NotificationService;

/// Tests that a broadcast reaches approved users only.
///
/// Expected: two notifications sent, none for the pending account
#[tokio::test]
async fn broadcast_reaches_approved_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    let pending = factory::user::UserFactory::new(db)
        .status("pending")
        .build()
        .await?;

    let sent = NotificationService::new(db)
        .send(None, "Fire drill".to_string(), "Friday at 10".to_string())
        .await?;

    assert_eq!(sent, 2);
    assert_eq!(unread(db, first.id).await, 1);
    assert_eq!(unread(db, second.id).await, 1);
    assert_eq!(unread(db, pending.id).await, 0);

    Ok(())
}

/// Tests that users cannot touch each other's notifications.
///
/// Expected: Err(AppError::NotFound) for the stranger, owner can mark it read
#[tokio::test]
async fn notifications_are_private() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let notification = factory::notification::create_notification(db, owner.id).await?;
    let service = NotificationService::new(db);

    let result = service.mark_read(stranger.id, notification.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    let result = service.delete(stranger.id, notification.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    service.mark_read(owner.id, notification.id).await?;
    assert_eq!(service.unread_count(owner.id).await?, 0);

    Ok(())
}
