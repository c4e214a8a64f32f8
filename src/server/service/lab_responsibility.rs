//! Lab responsibility (on-duty contact) service.
//!
//! At most one assignment covers any instant. A hand-off splits the current
//! assignment at `now`: the old holder's ends, and the new holder takes over
//! until the original end.

use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{lab_responsibility::LabResponsibilityRepository, user::UserRepository},
    error::AppError,
    model::{
        access::Feature,
        lab_responsibility::{AssignParams, HandoffParams, HandoffResult, LabResponsibility},
        schedule::validate_range,
        user::User,
    },
    service::{ensure_self_or, notification::notify},
};

pub struct LabResponsibilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LabResponsibilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assigns a user as on-duty contact for a time range.
    ///
    /// # Returns
    /// - `Ok(LabResponsibility)` - The new assignment
    /// - `Err(AppError::BadRequest)` - Empty range or assignee not approved
    /// - `Err(AppError::Conflict)` - Overlaps another assignment
    pub async fn assign(&self, params: AssignParams) -> Result<LabResponsibility, AppError> {
        validate_range(params.starts_at, params.ends_at)?;

        let txn = self.db.begin().await?;
        ensure_approved(&txn, params.user_id).await?;

        let repo = LabResponsibilityRepository::new(&txn);
        if repo.has_overlap(params.starts_at, params.ends_at).await? {
            return Err(AppError::Conflict(
                "Another assignment already covers part of this range".to_string(),
            ));
        }

        let assignment = repo.create(params).await?;
        notify(
            &txn,
            assignment.user_id,
            "Lab duty assigned",
            format!(
                "You are on duty from {} to {}.",
                assignment.starts_at, assignment.ends_at
            ),
        )
        .await?;
        txn.commit().await?;

        Ok(assignment)
    }

    pub async fn current(&self, now: DateTime<Utc>) -> Result<Option<LabResponsibility>, AppError> {
        Ok(LabResponsibilityRepository::new(self.db)
            .find_current(now)
            .await?)
    }

    /// Hands the current duty to another user.
    ///
    /// Allowed for the current holder or anyone with `ManageLabResponsibility`.
    /// A hand-off at the instant the current assignment starts replaces it
    /// outright rather than leaving an empty range behind.
    ///
    /// # Returns
    /// - `Ok(HandoffResult)` - The shortened and the new assignment
    /// - `Err(AppError::NotFound)` - Nobody is on duty, or the target does not exist
    /// - `Err(AppError::BadRequest)` - Target not approved or already on duty
    pub async fn handoff(
        &self,
        actor: &User,
        params: HandoffParams,
        now: DateTime<Utc>,
    ) -> Result<HandoffResult, AppError> {
        let txn = self.db.begin().await?;
        let repo = LabResponsibilityRepository::new(&txn);

        let Some(current) = repo.find_current(now).await? else {
            return Err(AppError::NotFound("Nobody is currently on duty".to_string()));
        };
        ensure_self_or(actor, current.user_id, Feature::ManageLabResponsibility)?;

        if params.to_user_id == current.user_id {
            return Err(AppError::BadRequest(
                "Target user is already on duty".to_string(),
            ));
        }
        ensure_approved(&txn, params.to_user_id).await?;

        let previous = if now > current.starts_at {
            repo.set_ends_at(current.id, now).await?;
            Some(LabResponsibility {
                ends_at: now,
                ..current.clone()
            })
        } else {
            repo.delete(current.id).await?;
            None
        };
        let next = repo
            .create(AssignParams {
                user_id: params.to_user_id,
                starts_at: now,
                ends_at: current.ends_at,
                note: params.note,
                assigned_by: Some(params.handed_by),
            })
            .await?;

        notify(
            &txn,
            current.user_id,
            "Lab duty handed off",
            "Your lab duty has been handed to another user.",
        )
        .await?;
        notify(
            &txn,
            next.user_id,
            "Lab duty handed to you",
            format!("You are on duty until {}.", next.ends_at),
        )
        .await?;
        txn.commit().await?;

        tracing::info!(
            "Lab duty handed from user {} to user {} by {}",
            current.user_id,
            next.user_id,
            params.handed_by
        );

        Ok(HandoffResult {
            previous,
            current: next,
        })
    }

    pub async fn get_in_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<LabResponsibility>, AppError> {
        validate_range(from, to)?;
        Ok(LabResponsibilityRepository::new(self.db)
            .get_in_range(from, to)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !LabResponsibilityRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Assignment not found".to_string()));
        }
        Ok(())
    }
}

async fn ensure_approved<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<(), AppError> {
    match UserRepository::new(db).find_by_id(user_id).await? {
        Some(user) if user.is_approved() => Ok(()),
        Some(_) => Err(AppError::BadRequest(
            "Lab duty can only be assigned to approved users".to_string(),
        )),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}
