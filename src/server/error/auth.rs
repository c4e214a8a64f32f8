use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user is logged in but their role lacks a required feature.
    ///
    /// # Fields
    /// - User id
    /// - Description of the denied access, logged server-side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown e-mail or wrong password on login.
    #[error("Invalid e-mail or password")]
    InvalidCredentials,

    /// The account exists but has not been approved yet.
    #[error("Account is awaiting approval")]
    AccountPending,

    /// The account was rejected by an approver.
    #[error("Account has been rejected")]
    AccountRejected,
}

/// Converts authentication errors into HTTP responses.
///
/// Missing or unknown sessions and bad credentials map to 401 Unauthorized. Accounts
/// that are not approved and missing permissions map to 403 Forbidden. Access denials
/// are logged at debug level with their detail while the client only sees a generic
/// message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in".to_string())
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::AccountPending | Self::AccountRejected => {
                (StatusCode::FORBIDDEN, self.to_string())
            }
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                (StatusCode::FORBIDDEN, "Insufficient permissions".to_string())
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
