//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Besides plain CRUD it owns the two counters stored on the user row: reward points
//! and the running weekly seconds. Both are changed with single `UPDATE ... SET col =
//! col +/- n` statements so concurrent writers never overwrite each other.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::{column_minus, column_plus},
    model::{
        access::{AccountStatus, Role},
        user::{CreateUserParam, User},
    },
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on e-mail
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.to_string()),
            status: ActiveValue::Set(param.status.to_string()),
            points: ActiveValue::Set(0),
            weekly_seconds: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by (already normalized) e-mail.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user and their stored password hash by e-mail.
    ///
    /// Only the login flow needs the hash, so it never travels in `User`.
    pub async fn find_credentials(&self, email: &str) -> Result<Option<(User, String)>, DbErr> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let hash = entity.password_hash.clone();
        Ok(Some((User::from_entity(entity)?, hash)))
    }

    /// Checks if any approved admin exists.
    ///
    /// Used at startup to decide whether a setup code is needed.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        Ok(self.count_admins().await? > 0)
    }

    /// Counts approved admins.
    pub async fn count_admins(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .filter(entity::user::Column::Status.eq(AccountStatus::Approved.as_str()))
            .count(self.db)
            .await
    }

    /// Gets all users with pagination, ordered by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Gets accounts awaiting approval, oldest first.
    pub async fn get_by_status(&self, status: AccountStatus) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Status.eq(status.as_str()))
            .order_by_asc(entity::user::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Ids of every approved user, used for broadcasts.
    pub async fn get_approved_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .filter(entity::user::Column::Status.eq(AccountStatus::Approved.as_str()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Sets role and status together.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was updated
    /// - `Ok(false)` - No user with that id
    pub async fn set_role_and_status(
        &self,
        id: i32,
        role: Role,
        status: AccountStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Role, Expr::value(role.as_str()))
            .col_expr(entity::user::Column::Status, Expr::value(status.as_str()))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn set_status(&self, id: i32, status: AccountStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Status, Expr::value(status.as_str()))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn set_role(&self, id: i32, role: Role) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Role, Expr::value(role.as_str()))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Adds `delta` points unconditionally (awards and refunds).
    pub async fn add_points(&self, id: i32, delta: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Points,
                column_plus(entity::user::Column::Points, delta),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Deducts `amount` points only if the balance covers it.
    ///
    /// The balance check and the write are one statement, so two concurrent
    /// redemptions can never drive the balance negative.
    ///
    /// # Returns
    /// - `Ok(true)` - Points deducted
    /// - `Ok(false)` - Insufficient balance or unknown user; nothing changed
    pub async fn deduct_points(&self, id: i32, amount: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Points,
                column_minus(entity::user::Column::Points, amount),
            )
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::Points.gte(amount))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Adds closed work-session seconds to the running weekly counter.
    pub async fn add_weekly_seconds(&self, id: i32, seconds: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::WeeklySeconds,
                column_plus(entity::user::Column::WeeklySeconds, seconds),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Subtracts archived seconds from the running weekly counter.
    ///
    /// The reset subtracts what it archived instead of writing zero, so seconds
    /// added after the counter was read stay for the next week.
    pub async fn subtract_weekly_seconds(&self, id: i32, seconds: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::WeeklySeconds,
                column_minus(entity::user::Column::WeeklySeconds, seconds),
            )
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::WeeklySeconds.gte(seconds))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Ids of users with a positive weekly counter.
    pub async fn get_ids_with_weekly_seconds(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .filter(entity::user::Column::WeeklySeconds.gt(0))
            .order_by_asc(entity::user::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
