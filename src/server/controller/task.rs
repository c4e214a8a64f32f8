use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        task::{CreateTaskDto, MoveTaskDto, TaskDto, UpdateTaskDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            access::Feature,
            task::{CreateTaskParams, MoveTaskParams, UpdateTaskParams},
        },
        service::task::TaskService,
        state::AppState,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "task";

/// Create a task at the bottom of the project's `todo` column.
///
/// # Access Control
/// - `ManageTasks`
///
/// # Returns
/// - `201 Created` - The new task
/// - `400 Bad Request` - Blank title, negative points, archived project or unapproved assignee
/// - `404 Not Found` - Project or assignee not found
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = TASK_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Task created", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Project or assignee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageTasks)])
        .await?;

    let params = CreateTaskParams::from_dto(payload)?;
    let task = TaskService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}

/// Get the tasks assigned to the logged-in user.
#[utoipa::path(
    get,
    path = "/api/tasks/mine",
    tag = TASK_TAG,
    responses(
        (status = 200, description = "Assigned tasks", body = Vec<TaskDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_tasks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let tasks = TaskService::new(&state.db).get_assigned(user.id).await?;
    let tasks_dto: Vec<_> = tasks.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(tasks_dto)))
}

#[utoipa::path(
    get,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "The task", body = TaskDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ViewProjects)])
        .await?;

    let task = TaskService::new(&state.db).get(task_id).await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Update task fields other than its column and position.
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Task ID")
    ),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Task updated", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Task or assignee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
    Json(payload): Json<UpdateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageTasks)])
        .await?;

    let params = UpdateTaskParams::from_dto(payload)?;
    let task = TaskService::new(&state.db).update(task_id, params).await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Move a task to another column or position.
///
/// The assignee may move their own task; anyone else needs `ManageTasks`. The
/// first move into `done` awards the task's points to the assignee.
///
/// # Returns
/// - `200 OK` - The moved task
/// - `400 Bad Request` - Unknown status or negative position
/// - `403 Forbidden` - Not the assignee and missing `ManageTasks`
/// - `404 Not Found` - Task not found
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}/status",
    tag = TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Task ID")
    ),
    request_body = MoveTaskDto,
    responses(
        (status = 200, description = "Task moved", body = TaskDto),
        (status = 400, description = "Invalid status or position", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to move this task", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
    Json(payload): Json<MoveTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = MoveTaskParams::from_dto(payload)?;
    let task = TaskService::new(&state.db)
        .move_task(&user, task_id, params, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageTasks)])
        .await?;

    TaskService::new(&state.db).delete(task_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
