use super::*;
use crate::{
    model::schedule::UpdateScheduleDto,
    server::{
        model::schedule::{CreateScheduleParams, UpdateScheduleParams},
        service::schedule::ScheduleService,
    },
};

fn slot(user_id: i32, from_hour: i64, to_hour: i64) -> CreateScheduleParams {
    CreateScheduleParams {
        user_id,
        title: "Lab shift".to_string(),
        starts_at: monday_at(from_hour),
        ends_at: monday_at(to_hour),
        note: None,
    }
}

/// Tests that a user's slots may touch but not overlap.
///
/// Expected: 9-12 then 12-14 succeed, 11-13 conflicts
#[tokio::test]
async fn overlapping_slot_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = domain(factory::user::create_user(db).await?);
    let service = ScheduleService::new(db);

    service.create(&user, slot(user.id, 9, 12)).await?;
    service.create(&user, slot(user.id, 12, 14)).await?;
    let result = service.create(&user, slot(user.id, 11, 13)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get_for_user(user.id).await?.len(), 2);

    Ok(())
}

/// Tests that other users' slots do not count as overlaps.
///
/// Expected: both users get the same time range
#[tokio::test]
async fn overlap_is_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = domain(factory::user::create_user(db).await?);
    let bob = domain(factory::user::create_user(db).await?);
    let service = ScheduleService::new(db);

    service.create(&alice, slot(alice.id, 9, 12)).await?;
    service.create(&bob, slot(bob.id, 9, 12)).await?;

    let found = service.get_in_range(monday_at(10), monday_at(11)).await?;
    assert_eq!(found.len(), 2);

    Ok(())
}

/// Tests that a volunteer cannot book a slot for someone else.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn volunteer_cannot_book_for_others() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = domain(factory::user::create_user(db).await?);
    let other = factory::user::create_user(db).await?;

    let result = ScheduleService::new(db)
        .create(&user, slot(other.id, 9, 12))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that an update keeps an omitted note and clears a blank one.
///
/// Expected: note survives a title change, then becomes None
#[tokio::test]
async fn update_keeps_or_clears_note() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = domain(factory::user::create_user(db).await?);
    let service = ScheduleService::new(db);
    let created = service
        .create(
            &user,
            CreateScheduleParams {
                note: Some("Bring the keys".to_string()),
                ..slot(user.id, 9, 12)
            },
        )
        .await?;

    let renamed = service
        .update(
            &user,
            created.id,
            UpdateScheduleParams::from_dto(UpdateScheduleDto {
                title: Some("Morning shift".to_string()),
                ..Default::default()
            })?,
        )
        .await?;
    assert_eq!(renamed.title, "Morning shift");
    assert_eq!(renamed.note.as_deref(), Some("Bring the keys"));

    let cleared = service
        .update(
            &user,
            created.id,
            UpdateScheduleParams::from_dto(UpdateScheduleDto {
                note: Some("  ".to_string()),
                ..Default::default()
            })?,
        )
        .await?;
    assert_eq!(cleared.note, None);
    assert_eq!(cleared.title, "Morning shift");

    Ok(())
}
