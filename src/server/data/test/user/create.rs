use super::*;

/// Tests creating a user and reading it back by e-mail.
///
/// Expected: Ok(User) with zero points and counter
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(CreateUserParam {
            email: "ada@lab.test".to_string(),
            name: "Ada".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Volunteer,
            status: AccountStatus::Pending,
        })
        .await?;

    assert_eq!(created.points, 0);
    assert_eq!(created.weekly_seconds, 0);

    let found = repo.find_by_email("ada@lab.test").await?.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.status, AccountStatus::Pending);

    let (_, hash) = repo.find_credentials("ada@lab.test").await?.unwrap();
    assert_eq!(hash, "hash");

    Ok(())
}

/// Tests that a second account with the same e-mail is rejected by the unique index.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("ada@lab.test")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            email: "ada@lab.test".to_string(),
            name: "Ada".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Volunteer,
            status: AccountStatus::Pending,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
