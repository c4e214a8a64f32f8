use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{
        access::{permits, AccountStatus, Feature},
        user::User,
    },
};

/// A requirement checked against the session user.
pub enum Permission {
    /// The user's role must grant the feature.
    Feature(Feature),
    /// The user must be the given user, or hold the feature.
    SelfOr(i32, Feature),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the session user and checks every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Logged in, approved and permitted
    /// - `Err(AuthError::UserNotInSession | UserNotInDatabase)` - 401
    /// - `Err(AuthError::AccountPending | AccountRejected | AccessDenied)` - 403
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        match user.status {
            AccountStatus::Approved => {}
            AccountStatus::Pending => return Err(AuthError::AccountPending.into()),
            AccountStatus::Rejected => return Err(AuthError::AccountRejected.into()),
        }

        for permission in permissions {
            match permission {
                Permission::Feature(feature) => {
                    if !permits(user.role, *feature) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("Role {} lacks {}", user.role, feature),
                        )
                        .into());
                    }
                }
                Permission::SelfOr(owner_id, feature) => {
                    if user.id != *owner_id && !permits(user.role, *feature) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!(
                                "Role {} lacks {} for data of user {}",
                                user.role, feature, owner_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
