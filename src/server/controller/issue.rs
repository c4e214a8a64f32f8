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
        issue::{CreateIssueDto, IssueDto, IssueFilter, UpdateIssueDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            access::Feature,
            issue::{CreateIssueParams, IssueStatus, UpdateIssueParams},
            parse_input,
        },
        service::issue::IssueService,
        state::AppState,
    },
};

/// Tag for grouping issue endpoints in OpenAPI documentation
pub static ISSUE_TAG: &str = "issue";

/// Report an issue. Priority defaults to `medium`.
#[utoipa::path(
    post,
    path = "/api/issues",
    tag = ISSUE_TAG,
    request_body = CreateIssueDto,
    responses(
        (status = 201, description = "Issue reported", body = IssueDto),
        (status = 400, description = "Blank title or unknown priority", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn report_issue(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateIssueDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ReportIssues)])
        .await?;

    let params = CreateIssueParams::from_dto(user.id, payload)?;
    let issue = IssueService::new(&state.db).report(params).await?;

    Ok((StatusCode::CREATED, Json(issue.into_dto())))
}

/// List issues, newest first.
///
/// Holders of `ManageIssues` see every issue; everyone else sees their own
/// reports. Both can filter by status.
#[utoipa::path(
    get,
    path = "/api/issues",
    tag = ISSUE_TAG,
    params(IssueFilter),
    responses(
        (status = 200, description = "Visible issues", body = Vec<IssueDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_issues(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<IssueFilter>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = filter
        .status
        .as_deref()
        .map(parse_input::<IssueStatus>)
        .transpose()?;
    let issues = IssueService::new(&state.db).list(&user, status).await?;
    let issues_dto: Vec<_> = issues.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(issues_dto)))
}

#[utoipa::path(
    get,
    path = "/api/issues/{issue_id}",
    tag = ISSUE_TAG,
    params(
        ("issue_id" = i32, Path, description = "Issue ID")
    ),
    responses(
        (status = 200, description = "The issue", body = IssueDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the reporter and missing permission", body = ErrorDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_issue(
    State(state): State<AppState>,
    session: Session,
    Path(issue_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let issue = IssueService::new(&state.db).get(&user, issue_id).await?;

    Ok((StatusCode::OK, Json(issue.into_dto())))
}

/// Triage an issue: status, priority and assignee.
///
/// The reporter is notified when the status changes.
#[utoipa::path(
    put,
    path = "/api/issues/{issue_id}",
    tag = ISSUE_TAG,
    params(
        ("issue_id" = i32, Path, description = "Issue ID")
    ),
    request_body = UpdateIssueDto,
    responses(
        (status = 200, description = "Issue updated", body = IssueDto),
        (status = 400, description = "Unknown status or priority", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_issue(
    State(state): State<AppState>,
    session: Session,
    Path(issue_id): Path<i32>,
    Json(payload): Json<UpdateIssueDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageIssues)])
        .await?;

    let params = UpdateIssueParams::from_dto(payload)?;
    let issue = IssueService::new(&state.db)
        .update(issue_id, params)
        .await?;

    Ok((StatusCode::OK, Json(issue.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/issues/{issue_id}",
    tag = ISSUE_TAG,
    params(
        ("issue_id" = i32, Path, description = "Issue ID")
    ),
    responses(
        (status = 204, description = "Issue deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_issue(
    State(state): State<AppState>,
    session: Session,
    Path(issue_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageIssues)])
        .await?;

    IssueService::new(&state.db).delete(issue_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
