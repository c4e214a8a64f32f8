use super::*;
use crate::server::{
    model::access::{AccountStatus, Role},
    service::user::UserService,
};

/// Tests approving a pending account with a role.
///
/// Expected: approved member and one notification
#[tokio::test]
async fn approve_sets_role_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = domain(
        factory::user::UserFactory::new(db)
            .role("manager")
            .build()
            .await?,
    );
    let pending = factory::user::UserFactory::new(db)
        .status("pending")
        .build()
        .await?;

    let approved = UserService::new(db)
        .approve(&manager, pending.id, Some(Role::Member))
        .await?;

    assert_eq!(approved.status, AccountStatus::Approved);
    assert_eq!(approved.role, Role::Member);
    assert_eq!(unread(db, pending.id).await, 1);

    Ok(())
}

/// Tests that a manager cannot approve someone as admin.
///
/// Expected: Err(AuthError::AccessDenied) and the account stays pending
#[tokio::test]
async fn manager_cannot_grant_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = domain(
        factory::user::UserFactory::new(db)
            .role("manager")
            .build()
            .await?,
    );
    let pending = factory::user::UserFactory::new(db)
        .status("pending")
        .build()
        .await?;

    let result = UserService::new(db)
        .approve(&manager, pending.id, Some(Role::Admin))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(reload(db, pending.id).await.status, AccountStatus::Pending);

    Ok(())
}

/// Tests that approval cannot be used to change the role of an approved admin.
///
/// Expected: Err(AppError::BadRequest) and the admin keeps the admin role
#[tokio::test]
async fn approve_refuses_already_approved_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let manager = domain(
        factory::user::UserFactory::new(db)
            .role("manager")
            .build()
            .await?,
    );

    let result = UserService::new(db)
        .approve(&manager, admin.id, Some(Role::Member))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let reloaded = reload(db, admin.id).await;
    assert_eq!(reloaded.role, Role::Admin);
    assert_eq!(reloaded.status, AccountStatus::Approved);
    assert_eq!(unread(db, admin.id).await, 0);

    Ok(())
}

/// Tests that a manager cannot approve a pending admin account into another role.
///
/// Expected: Err(AuthError::AccessDenied) and the role is unchanged
#[tokio::test]
async fn manager_cannot_remove_admin_role_on_approval() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = domain(
        factory::user::UserFactory::new(db)
            .role("manager")
            .build()
            .await?,
    );
    let pending_admin = factory::user::UserFactory::new(db)
        .role("admin")
        .status("pending")
        .build()
        .await?;

    let result = UserService::new(db)
        .approve(&manager, pending_admin.id, Some(Role::Volunteer))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    let reloaded = reload(db, pending_admin.id).await;
    assert_eq!(reloaded.role, Role::Admin);
    assert_eq!(reloaded.status, AccountStatus::Pending);

    Ok(())
}

/// Tests that the only admin cannot be demoted, but can once a second admin exists.
///
/// Expected: BadRequest first, then success
#[tokio::test]
async fn last_admin_cannot_be_demoted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = UserService::new(db);

    let admin = factory::user::create_admin(db).await?;

    let result = service.set_role(admin.id, Role::Member).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    factory::user::create_admin(db).await?;
    let demoted = service.set_role(admin.id, Role::Member).await?;
    assert_eq!(demoted.role, Role::Member);

    Ok(())
}

/// Tests that users cannot delete their own account.
///
/// Expected: Err(AppError::BadRequest) and the user still exists
#[tokio::test]
async fn cannot_delete_self() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;

    let result = UserService::new(db).delete(admin.id, admin.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(UserRepository::new(db).find_by_id(admin.id).await?.is_some());

    Ok(())
}

/// Tests that manual adjustments never push a balance below zero.
///
/// Expected: +5 applies, -10 is refused and the balance stays at 5
#[tokio::test]
async fn adjust_points_never_goes_negative() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = UserService::new(db);

    let user = factory::user::create_user(db).await?;

    let updated = service
        .adjust_points(user.id, 5, "Helped with inventory".to_string())
        .await?;
    assert_eq!(updated.points, 5);

    let result = service
        .adjust_points(user.id, -10, "Correction".to_string())
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(reload(db, user.id).await.points, 5);
    assert_eq!(unread(db, user.id).await, 1);

    Ok(())
}
