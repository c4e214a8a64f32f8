use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginationParams},
        work_session::{PaginatedWorkSessionsDto, StartWorkSessionDto, WorkSessionDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::access::Feature,
        service::work_session::WorkSessionService,
        state::AppState,
    },
};

/// Tag for grouping work session endpoints in OpenAPI documentation
pub static WORK_SESSION_TAG: &str = "work_session";

/// Start a work timer, optionally against a task.
///
/// # Returns
/// - `201 Created` - The running session
/// - `404 Not Found` - Task not found
/// - `409 Conflict` - A session is already running
#[utoipa::path(
    post,
    path = "/api/work-sessions/start",
    tag = WORK_SESSION_TAG,
    request_body = StartWorkSessionDto,
    responses(
        (status = 201, description = "Session started", body = WorkSessionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 409, description = "A session is already running", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_work_session(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<StartWorkSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::TrackWork)])
        .await?;

    let work_session = WorkSessionService::new(&state.db)
        .start(user.id, payload.task_id, Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(work_session.into_dto())))
}

/// Stop the running timer and credit its duration to this week's counter.
#[utoipa::path(
    post,
    path = "/api/work-sessions/stop",
    tag = WORK_SESSION_TAG,
    responses(
        (status = 200, description = "Session stopped", body = WorkSessionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "No running session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn stop_work_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::TrackWork)])
        .await?;

    let work_session = WorkSessionService::new(&state.db)
        .stop(user.id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(work_session.into_dto())))
}

/// Get the caller's running session, or `null` when idle.
#[utoipa::path(
    get,
    path = "/api/work-sessions/active",
    tag = WORK_SESSION_TAG,
    responses(
        (status = 200, description = "Running session or null", body = WorkSessionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_work_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let work_session = WorkSessionService::new(&state.db).active(user.id).await?;

    Ok((StatusCode::OK, Json(work_session.map(|s| s.into_dto()))))
}

/// Get a user's sessions, newest first.
///
/// # Access Control
/// - The user themself, or `ViewAllWorkSessions`
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/work-sessions",
    tag = WORK_SESSION_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Page of sessions", body = PaginatedWorkSessionsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_work_sessions(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOr(user_id, Feature::ViewAllWorkSessions)])
        .await?;

    let sessions = WorkSessionService::new(&state.db)
        .list(user_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(sessions.into_dto())))
}
