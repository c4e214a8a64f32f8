use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::MessageDto;

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness probe. Needs no session.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = MessageDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: "ok".to_string(),
        }),
    )
}
