use super::*;
use crate::server::{model::task::TaskStatus, service::project::ProjectService};

/// Tests that the board lists every column in order, even empty ones.
///
/// Expected: todo, in_progress, review, done; review is empty; todo ordered by
/// position then id
#[tokio::test]
async fn board_groups_tasks_into_ordered_columns() -> Result<(), AppError> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let project = factory::project::create_project(db, owner.id).await?;

    let late = factory::task::TaskFactory::new(db, project.id)
        .title("Late")
        .position(2)
        .build()
        .await?;
    let tied_first = factory::task::TaskFactory::new(db, project.id)
        .title("Tied first")
        .position(0)
        .build()
        .await?;
    let tied_second = factory::task::TaskFactory::new(db, project.id)
        .title("Tied second")
        .position(0)
        .build()
        .await?;
    let running = factory::task::TaskFactory::new(db, project.id)
        .status("in_progress")
        .build()
        .await?;
    let finished = factory::task::TaskFactory::new(db, project.id)
        .status("done")
        .build()
        .await?;

    let other = factory::project::create_project(db, owner.id).await?;
    factory::task::create_task(db, other.id).await?;

    let board = ProjectService::new(db).board(project.id).await?;

    assert_eq!(board.project.id, project.id);
    let statuses: Vec<TaskStatus> = board.columns.iter().map(|(status, _)| *status).collect();
    assert_eq!(statuses, TaskStatus::ALL.to_vec());

    let ids = |index: usize| -> Vec<i32> {
        board.columns[index].1.iter().map(|task| task.id).collect()
    };
    assert_eq!(ids(0), vec![tied_first.id, tied_second.id, late.id]);
    assert_eq!(ids(1), vec![running.id]);
    assert!(ids(2).is_empty());
    assert_eq!(ids(3), vec![finished.id]);

    Ok(())
}

/// Tests that the board of an unknown project is reported missing.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn board_of_unknown_project_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProjectService::new(db).board(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
