use super::*;
use crate::server::{
    model::task::{CreateTaskParams, MoveTaskParams, TaskStatus},
    service::task::TaskService,
};

fn new_task(project_id: i32, title: &str) -> CreateTaskParams {
    CreateTaskParams {
        project_id,
        title: title.to_string(),
        description: String::new(),
        assignee_id: None,
        due_date: None,
        points: 0,
    }
}

/// Tests that new tasks are appended to the todo column.
///
/// Expected: positions 0 and 1 in todo
#[tokio::test]
async fn create_appends_to_todo() -> Result<(), AppError> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let project = factory::project::create_project(db, owner.id).await?;
    let service = TaskService::new(db);

    let first = service.create(new_task(project.id, "First")).await?;
    let second = service.create(new_task(project.id, "Second")).await?;

    assert_eq!(first.status, TaskStatus::Todo);
    assert_eq!(first.position, 0);
    assert_eq!(second.position, 1);

    Ok(())
}

/// Tests that archived projects accept no new tasks.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn create_rejects_archived_project() -> Result<(), AppError> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let project = factory::project::ProjectFactory::new(db)
        .owner(owner.id)
        .status("archived")
        .build()
        .await?;

    let result = TaskService::new(db)
        .create(new_task(project.id, "Too late"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that completing a task awards its points only the first time.
///
/// Moves the task to done, back to todo and to done again.
///
/// Expected: points awarded once, completed_at kept, one notification
#[tokio::test]
async fn completion_awards_points_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let project = factory::project::create_project(db, user.id).await?;
    let task = factory::task::TaskFactory::new(db, project.id)
        .assignee(user.id)
        .points(5)
        .build()
        .await?;
    let actor = domain(user.clone());
    let service = TaskService::new(db);

    let done = service
        .move_task(
            &actor,
            task.id,
            MoveTaskParams {
                status: TaskStatus::Done,
                position: None,
            },
            monday_at(10),
        )
        .await?;
    assert_eq!(done.completed_at, Some(monday_at(10)));
    assert_eq!(reload(db, user.id).await.points, 5);

    service
        .move_task(
            &actor,
            task.id,
            MoveTaskParams {
                status: TaskStatus::Todo,
                position: None,
            },
            monday_at(11),
        )
        .await?;
    let again = service
        .move_task(
            &actor,
            task.id,
            MoveTaskParams {
                status: TaskStatus::Done,
                position: None,
            },
            monday_at(12),
        )
        .await?;

    assert_eq!(again.completed_at, Some(monday_at(10)));
    assert_eq!(reload(db, user.id).await.points, 5);
    assert_eq!(unread(db, user.id).await, 1);

    Ok(())
}

/// Tests that a volunteer cannot move a task assigned to someone else.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn volunteer_cannot_move_others_task() -> Result<(), AppError> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, task) = factory::helpers::create_task_with_dependencies(db).await?;
    let stranger = domain(factory::user::create_user(db).await?);

    let result = TaskService::new(db)
        .move_task(
            &stranger,
            task.id,
            MoveTaskParams {
                status: TaskStatus::InProgress,
                position: None,
            },
            monday_at(9),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
