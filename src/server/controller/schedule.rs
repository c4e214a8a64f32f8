use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        schedule::{CreateScheduleDto, ScheduleDto, TimeRangeParams, UpdateScheduleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            access::Feature,
            schedule::{CreateScheduleParams, UpdateScheduleParams},
        },
        service::schedule::ScheduleService,
        state::AppState,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

/// Get every slot intersecting `[from, to)`, earliest first.
#[utoipa::path(
    get,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    params(TimeRangeParams),
    responses(
        (status = 200, description = "Slots in range", body = Vec<ScheduleDto>),
        (status = 400, description = "Empty range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules(
    State(state): State<AppState>,
    session: Session,
    Query(range): Query<TimeRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ViewSchedules)])
        .await?;

    let slots = ScheduleService::new(&state.db)
        .get_in_range(range.from, range.to)
        .await?;
    let slots_dto: Vec<_> = slots.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(slots_dto)))
}

#[utoipa::path(
    get,
    path = "/api/schedules/mine",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "Own slots", body = Vec<ScheduleDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_schedules(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let slots = ScheduleService::new(&state.db).get_for_user(user.id).await?;
    let slots_dto: Vec<_> = slots.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(slots_dto)))
}

/// Book a slot for the caller, or for another user with `ManageSchedules`.
///
/// # Returns
/// - `201 Created` - The new slot
/// - `400 Bad Request` - Blank title or empty range
/// - `403 Forbidden` - Booking for someone else without permission
/// - `409 Conflict` - Overlaps one of the user's slots
#[utoipa::path(
    post,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    request_body = CreateScheduleDto,
    responses(
        (status = 201, description = "Slot created", body = ScheduleDto),
        (status = 400, description = "Invalid slot data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Overlapping slot", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateScheduleParams::from_dto(user.id, payload)?;
    let slot = ScheduleService::new(&state.db).create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(slot.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/schedules/{schedule_id}",
    tag = SCHEDULE_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule slot ID")
    ),
    request_body = UpdateScheduleDto,
    responses(
        (status = 200, description = "Slot updated", body = ScheduleDto),
        (status = 400, description = "Invalid slot data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Slot not found", body = ErrorDto),
        (status = 409, description = "Overlapping slot", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
    Json(payload): Json<UpdateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateScheduleParams::from_dto(payload)?;
    let slot = ScheduleService::new(&state.db)
        .update(&user, schedule_id, params)
        .await?;

    Ok((StatusCode::OK, Json(slot.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/schedules/{schedule_id}",
    tag = SCHEDULE_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule slot ID")
    ),
    responses(
        (status = 204, description = "Slot deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Slot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ScheduleService::new(&state.db)
        .delete(&user, schedule_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
