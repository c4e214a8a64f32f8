use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginationParams},
        user::{AdjustPointsDto, ApproveUserDto, PaginatedUsersDto, SetRoleDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            access::{Feature, Role},
            parse_input,
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get paginated users ordered by name.
///
/// # Access Control
/// - `ViewUsers`
///
/// # Returns
/// - `200 OK` - Page of users
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing permission
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ViewUsers)])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Get accounts awaiting approval, oldest first.
#[utoipa::path(
    get,
    path = "/api/users/pending",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Pending accounts", body = Vec<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ApproveUsers)])
        .await?;

    let users = UserService::new(&state.db).get_pending().await?;
    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Get one user. Users may always read their own account.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOr(user_id, Feature::ViewUsers)])
        .await?;

    let user = UserService::new(&state.db).get_user(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Approve a pending or rejected account.
///
/// The optional role defaults to the stored one. Only admins may grant `admin`.
/// The user is notified.
///
/// # Access Control
/// - `ApproveUsers`
///
/// # Returns
/// - `200 OK` - The approved user
/// - `400 Bad Request` - Unknown role, or the account is already approved
/// - `403 Forbidden` - Missing permission, or a non-admin granting or removing admin
/// - `404 Not Found` - User not found
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/approve",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = ApproveUserDto,
    responses(
        (status = 200, description = "User approved", body = UserDto),
        (status = 400, description = "Unknown role or already approved", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<ApproveUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ApproveUsers)])
        .await?;

    let role = payload.role.as_deref().map(parse_input::<Role>).transpose()?;
    let user = UserService::new(&state.db)
        .approve(&actor, user_id, role)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Reject an account. Admin accounts cannot be rejected.
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/reject",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User rejected", body = UserDto),
        (status = 400, description = "Target is an admin", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ApproveUsers)])
        .await?;

    let user = UserService::new(&state.db).reject(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change a user's role. The last admin cannot be demoted.
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/role",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = SetRoleDto,
    responses(
        (status = 200, description = "Role changed", body = UserDto),
        (status = 400, description = "Unknown role or last admin", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_user_role(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<SetRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageUsers)])
        .await?;

    let role = parse_input(&payload.role)?;
    let user = UserService::new(&state.db).set_role(user_id, role).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user. Self-deletion and deleting the last admin are refused.
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Self-deletion or last admin", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageUsers)])
        .await?;

    UserService::new(&state.db).delete(actor.id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add or remove points. The balance never goes negative.
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/points",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = AdjustPointsDto,
    responses(
        (status = 200, description = "Points adjusted", body = UserDto),
        (status = 400, description = "Zero delta, blank reason or negative balance", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn adjust_user_points(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<AdjustPointsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::AdjustPoints)])
        .await?;

    let user = UserService::new(&state.db)
        .adjust_points(user_id, payload.delta, payload.reason)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
