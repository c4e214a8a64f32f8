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
        badge::{AwardBadgeDto, BadgeDto, CreateBadgeDto, UserBadgeDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{access::Feature, badge::CreateBadgeParams},
        service::badge::BadgeService,
        state::AppState,
    },
};

/// Tag for grouping badge endpoints in OpenAPI documentation
pub static BADGE_TAG: &str = "badge";

#[utoipa::path(
    get,
    path = "/api/badges",
    tag = BADGE_TAG,
    responses(
        (status = 200, description = "All badges", body = Vec<BadgeDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_badges(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let badges = BadgeService::new(&state.db).get_all().await?;
    let badges_dto: Vec<_> = badges.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(badges_dto)))
}

/// Create a badge. Names are unique.
#[utoipa::path(
    post,
    path = "/api/badges",
    tag = BADGE_TAG,
    request_body = CreateBadgeDto,
    responses(
        (status = 201, description = "Badge created", body = BadgeDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_badge(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBadgeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageBadges)])
        .await?;

    let params = CreateBadgeParams::from_dto(payload)?;
    let badge = BadgeService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(badge.into_dto())))
}

/// Delete a badge and every award of it.
#[utoipa::path(
    delete,
    path = "/api/badges/{badge_id}",
    tag = BADGE_TAG,
    params(
        ("badge_id" = i32, Path, description = "Badge ID")
    ),
    responses(
        (status = 204, description = "Badge deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Badge not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_badge(
    State(state): State<AppState>,
    session: Session,
    Path(badge_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageBadges)])
        .await?;

    BadgeService::new(&state.db).delete(badge_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Award a badge to a user, who is notified.
///
/// # Returns
/// - `204 No Content` - Badge awarded
/// - `404 Not Found` - Badge or user not found
/// - `409 Conflict` - The user already holds the badge
#[utoipa::path(
    post,
    path = "/api/badges/{badge_id}/award",
    tag = BADGE_TAG,
    params(
        ("badge_id" = i32, Path, description = "Badge ID")
    ),
    request_body = AwardBadgeDto,
    responses(
        (status = 204, description = "Badge awarded"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Badge or user not found", body = ErrorDto),
        (status = 409, description = "Already awarded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn award_badge(
    State(state): State<AppState>,
    session: Session,
    Path(badge_id): Path<i32>,
    Json(payload): Json<AwardBadgeDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageBadges)])
        .await?;

    BadgeService::new(&state.db)
        .award(actor.id, badge_id, payload.user_id, Utc::now())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/badges/{badge_id}/award/{user_id}",
    tag = BADGE_TAG,
    params(
        ("badge_id" = i32, Path, description = "Badge ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Badge revoked"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Award not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revoke_badge(
    State(state): State<AppState>,
    session: Session,
    Path((badge_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageBadges)])
        .await?;

    BadgeService::new(&state.db)
        .revoke(badge_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the badges a user holds, most recent first. Badges are public.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/badges",
    tag = BADGE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Badges held", body = Vec<UserBadgeDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_badges(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let badges = BadgeService::new(&state.db).get_for_user(user_id).await?;
    let badges_dto: Vec<_> = badges.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(badges_dto)))
}
