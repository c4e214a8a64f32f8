use super::*;

/// Tests that tasks come back ordered by position and only for the project.
///
/// Expected: two tasks in position order
#[tokio::test]
async fn orders_by_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let project = factory::project::create_project(db, owner.id).await?;
    let other = factory::project::create_project(db, owner.id).await?;

    factory::task::TaskFactory::new(db, project.id)
        .title("Second")
        .position(1)
        .build()
        .await?;
    factory::task::TaskFactory::new(db, project.id)
        .title("First")
        .position(0)
        .build()
        .await?;
    factory::task::create_task(db, other.id).await?;

    let tasks = TaskRepository::new(db).get_by_project(project.id).await?;

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].title, "First");
    assert_eq!(tasks[1].title, "Second");

    Ok(())
}

/// Tests that deleting a project removes its tasks.
///
/// Expected: no tasks left for the project
#[tokio::test]
async fn project_delete_cascades() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project, task) = factory::helpers::create_task_with_dependencies(db).await?;

    crate::server::data::project::ProjectRepository::new(db)
        .delete(project.id)
        .await?;

    assert!(TaskRepository::new(db).find_by_id(task.id).await?.is_none());

    Ok(())
}
