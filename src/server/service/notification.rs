//! Notification service.
//!
//! Other services call `notify` with whatever connection they are using, so a
//! notification written inside a transaction commits or rolls back with it.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::server::{
    data::{notification::NotificationRepository, user::UserRepository},
    error::AppError,
    model::notification::{CreateNotificationParams, Notification},
};

/// Inserts a notification for one user.
pub async fn notify<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    title: impl Into<String>,
    body: impl Into<String>,
) -> Result<(), DbErr> {
    NotificationRepository::new(db)
        .create(CreateNotificationParams::new(user_id, title, body))
        .await?;
    Ok(())
}

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, user_id: i32, unread_only: bool) -> Result<Vec<Notification>, AppError> {
        let repo = NotificationRepository::new(self.db);
        Ok(repo.get_by_user(user_id, unread_only).await?)
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, AppError> {
        let repo = NotificationRepository::new(self.db);
        Ok(repo.count_unread(user_id).await?)
    }

    /// Marks one of the user's notifications read.
    ///
    /// # Returns
    /// - `Ok(())` - Marked read
    /// - `Err(AppError::NotFound)` - Missing, or owned by another user
    pub async fn mark_read(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);
        if !repo.mark_read(id, user_id).await? {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }
        Ok(())
    }

    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        let repo = NotificationRepository::new(self.db);
        Ok(repo.mark_all_read(user_id).await?)
    }

    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);
        if !repo.delete(id, user_id).await? {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }
        Ok(())
    }

    /// Sends a notification to one user, or to every approved user.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of notifications created
    /// - `Err(AppError::NotFound)` - Target user does not exist
    /// - `Err(AppError::BadRequest)` - Blank title
    pub async fn send(
        &self,
        user_id: Option<i32>,
        title: String,
        body: String,
    ) -> Result<u64, AppError> {
        let title = crate::server::model::require_text("title", title)?;
        let user_repo = UserRepository::new(self.db);
        let notification_repo = NotificationRepository::new(self.db);

        match user_id {
            Some(user_id) => {
                if user_repo.find_by_id(user_id).await?.is_none() {
                    return Err(AppError::NotFound("User not found".to_string()));
                }
                notification_repo
                    .create(CreateNotificationParams::new(user_id, title, body))
                    .await?;
                Ok(1)
            }
            None => {
                let ids = user_repo.get_approved_ids().await?;
                let sent = notification_repo.create_many(&ids, &title, &body).await?;
                tracing::info!("Broadcast notification '{}' to {} users", title, sent);
                Ok(sent)
            }
        }
    }
}
