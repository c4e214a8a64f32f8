use super::*;

/// Tests a user may act on their own data without the feature.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_own_data() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOr(user.id, Feature::ViewAllWorkSessions)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a user without the feature cannot read another user's data.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_user_data() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOr(other.id, Feature::ViewAllWorkSessions)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a manager holding the feature may read another user's data.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_with_feature() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let manager = factory::user::UserFactory::new(db)
        .role("manager")
        .build()
        .await?;
    let other = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(manager.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOr(other.id, Feature::ViewAllWorkSessions)])
        .await;

    assert!(result.is_ok());

    Ok(())
}
