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
        notification::{
            NotificationDto, NotificationFilter, SendNotificationDto, SentCountDto,
            UnreadCountDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::access::Feature,
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Get the caller's notifications, newest first.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(NotificationFilter),
    responses(
        (status = 200, description = "Own notifications", body = Vec<NotificationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<NotificationFilter>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notifications = NotificationService::new(&state.db)
        .list(user.id, filter.unread_only)
        .await?;
    let notifications_dto: Vec<_> = notifications.into_iter().map(|n| n.into_dto()).collect();

    Ok((StatusCode::OK, Json(notifications_dto)))
}

#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Unread count", body = UnreadCountDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let unread = NotificationService::new(&state.db)
        .unread_count(user.id)
        .await?;

    Ok((StatusCode::OK, Json(UnreadCountDto { unread })))
}

/// Mark one of the caller's notifications read.
///
/// Another user's notification is reported as not found.
#[utoipa::path(
    post,
    path = "/api/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Marked read"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    NotificationService::new(&state.db)
        .mark_read(user.id, notification_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Mark all of the caller's notifications read. Returns how many changed.
#[utoipa::path(
    post,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications marked read", body = SentCountDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let updated = NotificationService::new(&state.db)
        .mark_all_read(user.id)
        .await?;

    Ok((StatusCode::OK, Json(SentCountDto { sent: updated })))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{notification_id}",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    NotificationService::new(&state.db)
        .delete(user.id, notification_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Send a notification to one user, or to every approved user.
///
/// # Access Control
/// - `SendNotifications`
///
/// # Returns
/// - `200 OK` - Number of notifications created
/// - `400 Bad Request` - Blank title
/// - `404 Not Found` - Target user not found
#[utoipa::path(
    post,
    path = "/api/notifications/send",
    tag = NOTIFICATION_TAG,
    request_body = SendNotificationDto,
    responses(
        (status = 200, description = "Notifications sent", body = SentCountDto),
        (status = 400, description = "Blank title", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_notification(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SendNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::SendNotifications)])
        .await?;

    let sent = NotificationService::new(&state.db)
        .send(payload.user_id, payload.title, payload.body)
        .await?;

    Ok((StatusCode::OK, Json(SentCountDto { sent })))
}
