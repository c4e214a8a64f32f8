use super::*;

/// Tests a volunteer passes a check for a feature granted to everyone.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_everyone_feature_to_volunteer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Feature(Feature::TrackWork)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a volunteer is denied a manager feature.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_manager_feature_to_volunteer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Feature(Feature::ApproveUsers)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a manager is denied an admin-only feature.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_feature_to_manager() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("manager")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Feature(Feature::RunWeeklyReset)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests admin user passes every feature check.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn admin_passes_all_features() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let permissions: Vec<Permission> = Feature::ALL
        .into_iter()
        .map(Permission::Feature)
        .collect();
    let user = AuthGuard::new(db, session).require(&permissions).await?;

    assert_eq!(user.role, Role::Admin);

    Ok(())
}
