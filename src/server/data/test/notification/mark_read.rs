use super::*;

/// Tests that only the owner can mark a notification read.
///
/// Expected: false for another user, true for the owner
#[tokio::test]
async fn only_owner_marks_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let notification = factory::notification::create_notification(db, owner.id).await?;
    let repo = NotificationRepository::new(db);

    assert!(!repo.mark_read(notification.id, other.id).await?);
    assert_eq!(repo.count_unread(owner.id).await?, 1);

    assert!(repo.mark_read(notification.id, owner.id).await?);
    assert_eq!(repo.count_unread(owner.id).await?, 0);
    assert_eq!(repo.get_by_user(owner.id, true).await?.len(), 0);
    assert_eq!(repo.get_by_user(owner.id, false).await?.len(), 1);

    Ok(())
}
