use super::*;

/// Tests half-open overlap detection for one user's slots.
///
/// Expected: touching ranges pass, intersecting ranges are detected, the edited slot is skipped
#[tokio::test]
async fn detects_intersections_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let slot = factory::schedule::create_schedule(db, user.id, hour(9), hour(12)).await?;
    let repo = ScheduleRepository::new(db);

    assert!(!repo.has_overlap(user.id, hour(12), hour(14), None).await?);
    assert!(!repo.has_overlap(user.id, hour(7), hour(9), None).await?);
    assert!(repo.has_overlap(user.id, hour(11), hour(13), None).await?);
    assert!(!repo.has_overlap(user.id, hour(10), hour(11), Some(slot.id)).await?);
    assert!(!repo.has_overlap(other.id, hour(9), hour(12), None).await?);

    Ok(())
}
