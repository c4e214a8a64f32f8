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
        api::ErrorDto,
        lab_responsibility::{
            AssignLabResponsibilityDto, HandoffDto, HandoffResultDto, LabResponsibilityDto,
        },
        schedule::TimeRangeParams,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            access::Feature,
            lab_responsibility::{AssignParams, HandoffParams},
        },
        service::lab_responsibility::LabResponsibilityService,
        state::AppState,
    },
};

/// Tag for grouping lab responsibility endpoints in OpenAPI documentation
pub static LAB_RESPONSIBILITY_TAG: &str = "lab_responsibility";

/// Get the current on-duty assignment, or `null` when nobody is on duty.
#[utoipa::path(
    get,
    path = "/api/lab-responsibility/current",
    tag = LAB_RESPONSIBILITY_TAG,
    responses(
        (status = 200, description = "Current assignment or null", body = LabResponsibilityDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_lab_responsibility(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let current = LabResponsibilityService::new(&state.db)
        .current(Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(current.map(|a| a.into_dto()))))
}

/// Get assignments intersecting `[from, to)`, earliest first.
#[utoipa::path(
    get,
    path = "/api/lab-responsibility",
    tag = LAB_RESPONSIBILITY_TAG,
    params(TimeRangeParams),
    responses(
        (status = 200, description = "Assignments in range", body = Vec<LabResponsibilityDto>),
        (status = 400, description = "Empty range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lab_responsibilities(
    State(state): State<AppState>,
    session: Session,
    Query(range): Query<TimeRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ViewSchedules)])
        .await?;

    let assignments = LabResponsibilityService::new(&state.db)
        .get_in_range(range.from, range.to)
        .await?;
    let assignments_dto: Vec<_> = assignments.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(assignments_dto)))
}

/// Put a user on duty for a time range.
///
/// Only one user is on duty at a time, so the range must not overlap any other
/// assignment. The assignee must be approved and is notified.
///
/// # Access Control
/// - `ManageLabResponsibility`
///
/// # Returns
/// - `201 Created` - The new assignment
/// - `400 Bad Request` - Empty range or unapproved assignee
/// - `404 Not Found` - Assignee not found
/// - `409 Conflict` - Overlaps another assignment
#[utoipa::path(
    post,
    path = "/api/lab-responsibility",
    tag = LAB_RESPONSIBILITY_TAG,
    request_body = AssignLabResponsibilityDto,
    responses(
        (status = 201, description = "Assignment created", body = LabResponsibilityDto),
        (status = 400, description = "Invalid assignment", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Assignee not found", body = ErrorDto),
        (status = 409, description = "Overlapping assignment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_lab_responsibility(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AssignLabResponsibilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageLabResponsibility)])
        .await?;

    let assignment = LabResponsibilityService::new(&state.db)
        .assign(AssignParams {
            user_id: payload.user_id,
            starts_at: payload.starts_at,
            ends_at: payload.ends_at,
            note: payload.note,
            assigned_by: Some(user.id),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(assignment.into_dto())))
}

/// Hand the current duty to another user.
///
/// The running assignment ends now and the target takes over until its
/// original end. Both users are notified.
///
/// # Access Control
/// - The user currently on duty, or `ManageLabResponsibility`
#[utoipa::path(
    post,
    path = "/api/lab-responsibility/handoff",
    tag = LAB_RESPONSIBILITY_TAG,
    request_body = HandoffDto,
    responses(
        (status = 200, description = "Duty handed off", body = HandoffResultDto),
        (status = 400, description = "Target unapproved or already on duty", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not on duty and missing permission", body = ErrorDto),
        (status = 404, description = "Nobody on duty or target not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn handoff_lab_responsibility(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<HandoffDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = HandoffParams {
        to_user_id: payload.to_user_id,
        note: payload.note,
        handed_by: user.id,
    };
    let result = LabResponsibilityService::new(&state.db)
        .handoff(&user, params, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/lab-responsibility/{assignment_id}",
    tag = LAB_RESPONSIBILITY_TAG,
    params(
        ("assignment_id" = i32, Path, description = "Assignment ID")
    ),
    responses(
        (status = 204, description = "Assignment deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_lab_responsibility(
    State(state): State<AppState>,
    session: Session,
    Path(assignment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageLabResponsibility)])
        .await?;

    LabResponsibilityService::new(&state.db)
        .delete(assignment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
