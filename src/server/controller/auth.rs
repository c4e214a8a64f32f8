use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CurrentUserDto, LoginDto, RegisterDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::access::features_for,
        service::auth::{AuthService, RegisterParams},
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// New accounts are pending volunteers until approved. Supplying the setup code
/// printed at startup creates an approved admin instead; the code works once.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Invalid e-mail, blank name, short password or bad setup code
/// - `409 Conflict` - E-mail already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "E-mail already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.setup_code_service);

    let user = service
        .register(RegisterParams {
            email: payload.email,
            name: payload.name,
            password: payload.password,
            setup_code: payload.setup_code,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with e-mail and password.
///
/// On success the user id is stored in a freshly cycled session.
///
/// # Returns
/// - `200 OK` - Logged in, returns the user and their permissions
/// - `401 Unauthorized` - Unknown e-mail or wrong password
/// - `403 Forbidden` - Account pending approval or rejected
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = CurrentUserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account pending or rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.setup_code_service);
    let user = service.login(&payload.email, &payload.password).await?;

    let auth_session = AuthSession::new(&session);
    auth_session.cycle_id().await?;
    auth_session.set_user_id(user.id).await?;

    tracing::info!("User {} logged in", user.id);

    Ok((StatusCode::OK, Json(current_user_dto(user))))
}

/// Log out and clear the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get the logged-in user and the features their role grants.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = CurrentUserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Account pending or rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(current_user_dto(user))))
}

fn current_user_dto(user: crate::server::model::user::User) -> CurrentUserDto {
    let permissions = features_for(user.role)
        .into_iter()
        .map(|feature| feature.to_string())
        .collect();

    CurrentUserDto {
        user: user.into_dto(),
        permissions,
    }
}
