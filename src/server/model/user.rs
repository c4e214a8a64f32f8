//! User domain models and parameters.
//!
//! Users register with e-mail and password, start out pending, and are approved
//! into one of the roles of the role matrix. Points and the running weekly seconds
//! counter live on the user row.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::user::{PaginatedUsersDto, UserDto},
    server::{
        model::access::{AccountStatus, Role},
        util::parse::parse_stored,
    },
};

/// Account with role, approval state and balances.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Lower-cased login e-mail.
    pub email: String,
    /// Display name of the user.
    pub name: String,
    pub role: Role,
    pub status: AccountStatus,
    /// Redeemable reward points. Never negative.
    pub points: i32,
    /// Work-session seconds accumulated since the last weekly reset.
    pub weekly_seconds: i64,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.to_string(),
            status: self.status.to_string(),
            points: self.points,
            weekly_seconds: self.weekly_seconds,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - Stored role or status is not a known value
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: parse_stored("role", entity.role)?,
            status: parse_stored("status", entity.status)?,
            points: entity.points,
            weekly_seconds: entity.weekly_seconds,
            created_at: entity.created_at,
        })
    }

    pub fn is_approved(&self) -> bool {
        self.status == AccountStatus::Approved
    }
}

/// Parameters for inserting a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub name: String,
    /// PHC-formatted argon2 hash.
    pub password_hash: String,
    pub role: Role,
    pub status: AccountStatus,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    #[test]
    fn converts_stored_role_and_status() {
        let entity = fixture::user_entity_builder()
            .role("manager")
            .status("pending")
            .points(40)
            .build();

        let user = User::from_entity(entity).unwrap();

        assert_eq!(user.role, Role::Manager);
        assert_eq!(user.status, AccountStatus::Pending);
        assert_eq!(user.points, 40);
        assert!(!user.is_approved());
    }

    #[test]
    fn rejects_unknown_stored_role() {
        let entity = fixture::user_entity_builder().role("overlord").build();

        assert!(User::from_entity(entity).is_err());
    }

    #[test]
    fn dto_carries_lowercase_role() {
        let dto = User::from_entity(fixture::user_entity()).unwrap().into_dto();

        assert_eq!(dto.role, "volunteer");
        assert_eq!(dto.status, "approved");
        assert_eq!(dto.email, fixture::user::DEFAULT_EMAIL);
    }
}
