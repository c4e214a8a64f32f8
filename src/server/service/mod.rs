//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls within one transaction
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Inside a transaction a service only touches the transaction handle, never the
//! pool it was opened from.

pub mod auth;
pub mod badge;
pub mod issue;
pub mod lab_responsibility;
pub mod notification;
pub mod project;
pub mod reward;
pub mod schedule;
pub mod setup_code;
pub mod task;
pub mod user;
pub mod weekly_hours;
pub mod weekly_report;
pub mod work_session;

#[cfg(test)]
mod test;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        access::{permits, Feature},
        user::User,
    },
};

/// Passes when `actor` owns the resource or holds `feature`.
pub fn ensure_self_or(actor: &User, owner_id: i32, feature: Feature) -> Result<(), AppError> {
    if actor.id == owner_id || permits(actor.role, feature) {
        return Ok(());
    }
    Err(AuthError::AccessDenied(
        actor.id,
        format!(
            "User attempted to act on a resource of user {} without {}",
            owner_id, feature
        ),
    )
    .into())
}
