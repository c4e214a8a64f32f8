use super::*;
use crate::server::{
    data::badge::BadgeRepository, model::badge::CreateBadgeParams, service::badge::BadgeService,
};

/// Tests that an insert losing a race to a duplicate name still reports a conflict.
///
/// Expected: the unique index violation maps to AppError::Conflict
#[tokio::test]
async fn unique_violation_on_insert_maps_to_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Badge)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::badge::create_badge_named(db, "First Light").await?;

    let err = BadgeRepository::new(db)
        .create(CreateBadgeParams {
            name: "First Light".to_string(),
            description: String::new(),
            icon: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        AppError::conflict_on_unique(err, "duplicate"),
        AppError::Conflict(_)
    ));

    Ok(())
}

/// Tests that a repeated award hitting the composite key reports a conflict.
///
/// Expected: AppError::Conflict
#[tokio::test]
async fn duplicate_award_insert_maps_to_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Badge)
        .with_table(entity::prelude::UserBadge)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let badge = factory::badge::create_badge(db).await?;
    let repo = BadgeRepository::new(db);

    repo.award(user.id, badge.id, None, monday_at(9)).await?;
    let err = repo
        .award(user.id, badge.id, None, monday_at(10))
        .await
        .unwrap_err();

    assert!(matches!(
        AppError::conflict_on_unique(err, "duplicate"),
        AppError::Conflict(_)
    ));

    Ok(())
}

/// Tests that database errors other than unique violations pass through.
///
/// Expected: AppError::DbErr
#[test]
fn other_database_errors_are_not_conflicts() {
    let err = sea_orm::DbErr::Custom("disk on fire".to_string());

    assert!(matches!(
        AppError::conflict_on_unique(err, "duplicate"),
        AppError::DbErr(_)
    ));
}

/// Tests that badge names are unique.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn duplicate_badge_name_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Badge)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::badge::create_badge_named(db, "First Light").await?;

    let result = BadgeService::new(db)
        .create(CreateBadgeParams {
            name: "First Light".to_string(),
            description: String::new(),
            icon: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests awarding, repeat awarding and revoking a badge.
///
/// Expected: award notifies, repeat conflicts, revoke empties the list
#[tokio::test]
async fn award_once_then_revoke() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .with_table(entity::prelude::Badge)
        .with_table(entity::prelude::UserBadge)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::user::UserFactory::new(db)
        .role("manager")
        .build()
        .await?;
    let user = factory::user::create_user(db).await?;
    let badge = factory::badge::create_badge(db).await?;
    let service = BadgeService::new(db);

    service.award(manager.id, badge.id, user.id, monday_at(9)).await?;
    assert_eq!(unread(db, user.id).await, 1);

    let held = service.get_for_user(user.id).await?;
    assert_eq!(held.len(), 1);
    assert_eq!(held[0].badge.id, badge.id);
    assert_eq!(held[0].awarded_by, Some(manager.id));

    let again = service.award(manager.id, badge.id, user.id, monday_at(10)).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    service.revoke(badge.id, user.id).await?;
    assert!(service.get_for_user(user.id).await?.is_empty());

    Ok(())
}
