use super::*;
use crate::server::{
    model::access::{AccountStatus, Role},
    service::{
        auth::{hash_password, AuthService, RegisterParams},
        setup_code::SetupCodeService,
    },
};

fn params(email: &str, setup_code: Option<String>) -> RegisterParams {
    RegisterParams {
        email: email.to_string(),
        name: "Ada".to_string(),
        password: "correct horse".to_string(),
        setup_code,
    }
}

/// Tests that a plain registration creates a pending volunteer.
///
/// Expected: pending volunteer with normalized e-mail
#[tokio::test]
async fn register_creates_pending_volunteer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = SetupCodeService::new();

    let user = AuthService::new(db, &codes)
        .register(params("  Ada@Lab.Test ", None))
        .await?;

    assert_eq!(user.email, "ada@lab.test");
    assert_eq!(user.role, Role::Volunteer);
    assert_eq!(user.status, AccountStatus::Pending);

    Ok(())
}

/// Tests that the setup code creates an approved admin exactly once.
///
/// Expected: first registration is an approved admin, reusing the code fails
#[tokio::test]
async fn setup_code_creates_admin_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = SetupCodeService::new();
    let code = codes.generate().await;
    let service = AuthService::new(db, &codes);

    let admin = service
        .register(params("root@lab.test", Some(code.clone())))
        .await?;
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(admin.status, AccountStatus::Approved);

    let result = service.register(params("second@lab.test", Some(code))).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that e-mails are unique regardless of case.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn register_rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = SetupCodeService::new();
    let service = AuthService::new(db, &codes);

    service.register(params("ada@lab.test", None)).await?;
    let result = service.register(params("ADA@lab.test", None)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that short passwords are refused.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn register_rejects_short_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = SetupCodeService::new();

    let result = AuthService::new(db, &codes)
        .register(RegisterParams {
            password: "short".to_string(),
            ..params("ada@lab.test", None)
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests login outcomes for each account state.
///
/// Expected: approved logs in, wrong password is 401, pending is refused
#[tokio::test]
async fn login_checks_password_and_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = SetupCodeService::new();
    let hash = hash_password("correct horse")?;

    factory::user::UserFactory::new(db)
        .email("ok@lab.test")
        .password_hash(hash.clone())
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("wait@lab.test")
        .password_hash(hash)
        .status("pending")
        .build()
        .await?;

    let service = AuthService::new(db, &codes);

    let user = service.login("OK@lab.test", "correct horse").await?;
    assert_eq!(user.email, "ok@lab.test");

    let wrong = service.login("ok@lab.test", "wrong horse").await;
    assert!(matches!(
        wrong,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let unknown = service.login("nobody@lab.test", "correct horse").await;
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let pending = service.login("wait@lab.test", "correct horse").await;
    assert!(matches!(
        pending,
        Err(AppError::AuthErr(AuthError::AccountPending))
    ));

    Ok(())
}
