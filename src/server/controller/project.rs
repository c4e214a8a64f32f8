use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        project::{BoardDto, CreateProjectDto, ProjectDto, UpdateProjectDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            access::Feature,
            project::{CreateProjectParams, UpdateProjectParams},
        },
        service::project::ProjectService,
        state::AppState,
    },
};

/// Tag for grouping project endpoints in OpenAPI documentation
pub static PROJECT_TAG: &str = "project";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectFilter {
    /// Include archived projects (default: false)
    #[serde(default)]
    pub include_archived: bool,
}

/// Get projects ordered by name.
///
/// Archived projects are hidden unless `include_archived` is set.
///
/// # Access Control
/// - `ViewProjects`
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    params(ProjectFilter),
    responses(
        (status = 200, description = "Projects", body = Vec<ProjectDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<ProjectFilter>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ViewProjects)])
        .await?;

    let projects = ProjectService::new(&state.db)
        .get_all(filter.include_archived)
        .await?;
    let projects_dto: Vec<_> = projects.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(projects_dto)))
}

/// Create a project owned by the caller.
///
/// # Access Control
/// - `ManageProjects`
///
/// # Returns
/// - `201 Created` - The new project
/// - `400 Bad Request` - Blank name
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Project created", body = ProjectDto),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageProjects)])
        .await?;

    let params = CreateProjectParams::from_dto(user.id, payload)?;
    let project = ProjectService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(project.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "The project", body = ProjectDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ViewProjects)])
        .await?;

    let project = ProjectService::new(&state.db).get(project_id).await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// Update a project's name, description or status.
///
/// Setting the status to `archived` closes the project to new tasks.
#[utoipa::path(
    put,
    path = "/api/projects/{project_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Project updated", body = ProjectDto),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
    Json(payload): Json<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageProjects)])
        .await?;

    let params = UpdateProjectParams::from_dto(payload)?;
    let project = ProjectService::new(&state.db)
        .update(project_id, params)
        .await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// Delete a project and all of its tasks.
#[utoipa::path(
    delete,
    path = "/api/projects/{project_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageProjects)])
        .await?;

    ProjectService::new(&state.db).delete(project_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the project's Kanban board.
///
/// Returns the four columns `todo`, `in_progress`, `review` and `done`, each
/// ordered by position and then id.
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/board",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "The board", body = BoardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project_board(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ViewProjects)])
        .await?;

    let board = ProjectService::new(&state.db).board(project_id).await?;

    Ok((StatusCode::OK, Json(board.into_dto())))
}
