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
        weekly_hours::{HoursSummaryDto, WeeklyResetDto, WeeklyResetRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::access::Feature,
        service::weekly_hours::WeeklyHoursService,
        state::AppState,
    },
};

/// Tag for grouping weekly hours endpoints in OpenAPI documentation
pub static WEEKLY_HOURS_TAG: &str = "weekly_hours";

/// Get a user's running weekly counter and archived weeks, newest first.
///
/// # Access Control
/// - The user themself, or `ViewAllWorkSessions`
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/hours",
    tag = WEEKLY_HOURS_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Hours summary", body = HoursSummaryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_hours(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOr(user_id, Feature::ViewAllWorkSessions)])
        .await?;

    let summary = WeeklyHoursService::new(&state.db).summary(user_id).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Run the weekly reset by hand.
///
/// Archives every positive counter into `week_start` (a Monday, defaulting to
/// the week that ended most recently) and subtracts the archived amount. The
/// same job runs on the cron schedule; running it again for the same week only
/// archives seconds accrued since the previous run.
///
/// # Access Control
/// - `RunWeeklyReset`
///
/// # Returns
/// - `200 OK` - Users archived and seconds moved
/// - `400 Bad Request` - `week_start` is not a Monday
#[utoipa::path(
    post,
    path = "/api/admin/weekly-reset",
    tag = WEEKLY_HOURS_TAG,
    request_body = WeeklyResetRequestDto,
    responses(
        (status = 200, description = "Reset completed", body = WeeklyResetDto),
        (status = 400, description = "week_start is not a Monday", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn run_weekly_reset(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<WeeklyResetRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::RunWeeklyReset)])
        .await?;

    let service = WeeklyHoursService::new(&state.db);
    let now = Utc::now();
    let summary = match payload.week_start {
        Some(week_start) => service.reset(week_start, now).await?,
        None => service.reset_previous_week(now).await?,
    };

    tracing::info!(
        "User {} ran the weekly reset for {}",
        user.id,
        summary.week_start
    );

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
