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
        weekly_report::{
            ReviewWeeklyReportDto, SubmitWeeklyReportDto, UpdateWeeklyReportDto,
            WeeklyReportDto, WeeklyReportFilter,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            access::Feature,
            weekly_report::{SubmitReportParams, UpdateReportParams},
        },
        service::weekly_report::WeeklyReportService,
        state::AppState,
    },
};

/// Tag for grouping weekly report endpoints in OpenAPI documentation
pub static WEEKLY_REPORT_TAG: &str = "weekly_report";

/// Submit the caller's report for a week.
///
/// `week_start` must be a Monday and defaults to the current week. Each user
/// submits at most one report per week.
///
/// # Returns
/// - `201 Created` - The submitted report
/// - `400 Bad Request` - Blank summary or `week_start` not a Monday
/// - `409 Conflict` - A report for that week already exists
#[utoipa::path(
    post,
    path = "/api/weekly-reports",
    tag = WEEKLY_REPORT_TAG,
    request_body = SubmitWeeklyReportDto,
    responses(
        (status = 201, description = "Report submitted", body = WeeklyReportDto),
        (status = 400, description = "Invalid report data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 409, description = "Report for that week already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_weekly_report(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SubmitWeeklyReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::SubmitWeeklyReports)])
        .await?;

    let params = SubmitReportParams::from_dto(user.id, payload)?;
    let report = WeeklyReportService::new(&state.db)
        .submit(params, Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(report.into_dto())))
}

/// Get the caller's reports, newest week first.
#[utoipa::path(
    get,
    path = "/api/weekly-reports/mine",
    tag = WEEKLY_REPORT_TAG,
    responses(
        (status = 200, description = "Own reports", body = Vec<WeeklyReportDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_weekly_reports(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reports = WeeklyReportService::new(&state.db).get_mine(user.id).await?;
    let reports_dto: Vec<_> = reports.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reports_dto)))
}

/// Get every report, optionally for one week only.
#[utoipa::path(
    get,
    path = "/api/weekly-reports",
    tag = WEEKLY_REPORT_TAG,
    params(WeeklyReportFilter),
    responses(
        (status = 200, description = "Reports", body = Vec<WeeklyReportDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_weekly_reports(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<WeeklyReportFilter>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ReviewWeeklyReports)])
        .await?;

    let reports = WeeklyReportService::new(&state.db)
        .get_all(filter.week_start)
        .await?;
    let reports_dto: Vec<_> = reports.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reports_dto)))
}

#[utoipa::path(
    get,
    path = "/api/weekly-reports/{report_id}",
    tag = WEEKLY_REPORT_TAG,
    params(
        ("report_id" = i32, Path, description = "Weekly report ID")
    ),
    responses(
        (status = 200, description = "The report", body = WeeklyReportDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author or a reviewer", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_weekly_report(
    State(state): State<AppState>,
    session: Session,
    Path(report_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let report = WeeklyReportService::new(&state.db)
        .get(&user, report_id)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Edit an own report that has not been reviewed yet.
#[utoipa::path(
    put,
    path = "/api/weekly-reports/{report_id}",
    tag = WEEKLY_REPORT_TAG,
    params(
        ("report_id" = i32, Path, description = "Weekly report ID")
    ),
    request_body = UpdateWeeklyReportDto,
    responses(
        (status = 200, description = "Report updated", body = WeeklyReportDto),
        (status = 400, description = "Blank summary or report already reviewed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_weekly_report(
    State(state): State<AppState>,
    session: Session,
    Path(report_id): Path<i32>,
    Json(payload): Json<UpdateWeeklyReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateReportParams::from_dto(payload)?;
    let report = WeeklyReportService::new(&state.db)
        .update(user.id, report_id, params)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Mark a report reviewed with optional feedback. The author is notified.
#[utoipa::path(
    post,
    path = "/api/weekly-reports/{report_id}/review",
    tag = WEEKLY_REPORT_TAG,
    params(
        ("report_id" = i32, Path, description = "Weekly report ID")
    ),
    request_body = ReviewWeeklyReportDto,
    responses(
        (status = 200, description = "Report reviewed", body = WeeklyReportDto),
        (status = 400, description = "Report already reviewed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_weekly_report(
    State(state): State<AppState>,
    session: Session,
    Path(report_id): Path<i32>,
    Json(payload): Json<ReviewWeeklyReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let reviewer = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ReviewWeeklyReports)])
        .await?;

    let report = WeeklyReportService::new(&state.db)
        .review(reviewer.id, report_id, payload.feedback, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
