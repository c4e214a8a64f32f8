use super::*;

/// Tests the next position in an empty and a filled column.
///
/// Expected: 0 for an empty column, one past the highest otherwise
#[tokio::test]
async fn appends_after_highest_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let project = factory::project::create_project(db, owner.id).await?;
    let repo = TaskRepository::new(db);

    assert_eq!(repo.next_position(project.id, TaskStatus::Todo).await?, 0);

    factory::task::TaskFactory::new(db, project.id)
        .position(4)
        .build()
        .await?;
    factory::task::TaskFactory::new(db, project.id)
        .status("review")
        .position(9)
        .build()
        .await?;

    assert_eq!(repo.next_position(project.id, TaskStatus::Todo).await?, 5);
    assert_eq!(repo.next_position(project.id, TaskStatus::Review).await?, 10);
    assert_eq!(repo.next_position(project.id, TaskStatus::Done).await?, 0);

    Ok(())
}
