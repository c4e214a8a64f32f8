use super::*;

/// Tests inserting one notification per user.
///
/// Expected: count matches and each user has one unread
#[tokio::test]
async fn inserts_one_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;
    let repo = NotificationRepository::new(db);

    let sent = repo.create_many(&[a.id, b.id], "Hello", "Welcome").await?;

    assert_eq!(sent, 2);
    assert_eq!(repo.count_unread(a.id).await?, 1);
    assert_eq!(repo.count_unread(b.id).await?, 1);

    Ok(())
}

/// Tests that an empty recipient list is a no-op.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_recipients_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sent = NotificationRepository::new(db)
        .create_many(&[], "Hello", "Nobody")
        .await?;

    assert_eq!(sent, 0);

    Ok(())
}
