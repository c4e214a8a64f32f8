use super::*;

/// Tests finding the assignment covering an instant.
///
/// Expected: the covering assignment at its start, none at its end
#[tokio::test]
async fn uses_half_open_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::LabResponsibility)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let assignment =
        factory::lab_responsibility::create_lab_responsibility(db, user.id, hour(8), hour(16))
            .await?;
    let repo = LabResponsibilityRepository::new(db);

    let current = repo.find_current(hour(8)).await?.unwrap();
    assert_eq!(current.id, assignment.id);
    assert!(repo.find_current(hour(16)).await?.is_none());
    assert!(repo.find_current(hour(7)).await?.is_none());

    Ok(())
}
