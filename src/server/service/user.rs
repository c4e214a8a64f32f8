//! User service for business logic.
//!
//! This module provides the `UserService` for account administration: listing,
//! approval, role changes, deletion and point adjustments. Every rule that keeps
//! at least one approved admin in the system lives here.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        access::{AccountStatus, Role},
        total_pages,
        user::{PaginatedUsers, User},
    },
    service::notification::notify,
};

/// Service providing business logic for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for user queries, approval and role administration.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_user(&self, id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Retrieves all users with pagination.
    ///
    /// Returns a paginated collection of users ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    pub async fn get_all_users(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);
        let (users, total) = user_repo.get_all_paginated(page, per_page).await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Accounts waiting for approval, oldest first.
    pub async fn get_pending(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        Ok(user_repo.get_by_status(AccountStatus::Pending).await?)
    }

    /// Approves an account, optionally assigning a role at the same time.
    ///
    /// Only pending or rejected accounts can be approved, and only admins may approve
    /// someone as admin or change an admin's role. The approved user is notified.
    ///
    /// # Arguments
    /// - `actor` - The approving user
    /// - `id` - Account to approve
    /// - `role` - Role to grant, defaults to the account's current role
    ///
    /// # Returns
    /// - `Ok(User)` - The approved account
    /// - `Err(AppError::NotFound)` - No account with that id
    /// - `Err(AppError::BadRequest)` - The account is already approved
    /// - `Err(AuthError::AccessDenied)` - Non-admin tried to grant or remove admin
    pub async fn approve(&self, actor: &User, id: i32, role: Option<Role>) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let Some(user) = user_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };
        if user.status == AccountStatus::Approved {
            return Err(AppError::BadRequest(format!(
                "User {} is already approved",
                id
            )));
        }

        let role = role.unwrap_or(user.role);
        if (role == Role::Admin || user.role == Role::Admin) && actor.role != Role::Admin {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("Only admins may grant or remove the admin role of user {}", id),
            )
            .into());
        }

        user_repo
            .set_role_and_status(id, role, AccountStatus::Approved)
            .await?;
        notify(
            &txn,
            id,
            "Account approved",
            format!("Your account has been approved with the {} role.", role),
        )
        .await?;

        let approved = user_repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::InternalError(format!("User {} vanished during approval", id))
        })?;
        txn.commit().await?;

        tracing::info!("User {} approved user {} as {}", actor.id, id, role);

        Ok(approved)
    }

    /// Rejects an account. Admin accounts cannot be rejected.
    pub async fn reject(&self, id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };
        if user.role == Role::Admin {
            return Err(AppError::BadRequest(
                "Admin accounts cannot be rejected".to_string(),
            ));
        }

        user_repo.set_status(id, AccountStatus::Rejected).await?;

        Ok(User {
            status: AccountStatus::Rejected,
            ..user
        })
    }

    /// Changes a user's role.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::BadRequest)` - Would demote the last approved admin
    pub async fn set_role(&self, id: i32, role: Role) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let Some(user) = user_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if Self::is_active_admin(&user) && role != Role::Admin && user_repo.count_admins().await? <= 1
        {
            return Err(AppError::BadRequest(
                "Cannot demote the last admin".to_string(),
            ));
        }

        user_repo.set_role(id, role).await?;
        txn.commit().await?;

        Ok(User { role, ..user })
    }

    /// Deletes a user. Users cannot delete themselves, and the last approved
    /// admin cannot be deleted.
    pub async fn delete(&self, actor_id: i32, id: i32) -> Result<(), AppError> {
        if actor_id == id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let Some(user) = user_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if Self::is_active_admin(&user) && user_repo.count_admins().await? <= 1 {
            return Err(AppError::BadRequest(
                "Cannot delete the last admin".to_string(),
            ));
        }

        user_repo.delete(id).await?;
        txn.commit().await?;

        tracing::info!("User {} deleted user {}", actor_id, id);

        Ok(())
    }

    /// Adds or removes points by hand.
    ///
    /// A negative `delta` is refused when the balance would drop below zero.
    /// The user is notified with the reason.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the new balance
    /// - `Err(AppError::BadRequest)` - Zero delta, blank reason or insufficient balance
    pub async fn adjust_points(&self, id: i32, delta: i32, reason: String) -> Result<User, AppError> {
        let reason = crate::server::model::require_text("reason", reason)?;
        if delta == 0 {
            return Err(AppError::BadRequest("delta must not be zero".to_string()));
        }

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        if user_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let applied = if delta > 0 {
            user_repo.add_points(id, delta).await?
        } else {
            user_repo.deduct_points(id, delta.saturating_neg()).await?
        };
        if !applied {
            return Err(AppError::BadRequest(
                "Points balance cannot go negative".to_string(),
            ));
        }

        notify(
            &txn,
            id,
            "Points adjusted",
            format!("Your points changed by {}: {}", delta, reason),
        )
        .await?;

        let user = user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        txn.commit().await?;

        Ok(user)
    }

    fn is_active_admin(user: &User) -> bool {
        user.role == Role::Admin && user.status == AccountStatus::Approved
    }
}
