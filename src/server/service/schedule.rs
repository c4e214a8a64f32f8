//! Schedule service.
//!
//! A user's slots never overlap. Touching slots are fine since ranges are half-open.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{schedule::ScheduleRepository, user::UserRepository},
    error::AppError,
    model::{
        access::Feature,
        schedule::{validate_range, CreateScheduleParams, Schedule, UpdateScheduleParams},
        user::User,
    },
    service::ensure_self_or,
};

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a slot for the actor, or for another user when the actor manages schedules.
    ///
    /// # Returns
    /// - `Ok(Schedule)` - The created slot
    /// - `Err(AuthError::AccessDenied)` - Slot for another user without `ManageSchedules`
    /// - `Err(AppError::NotFound)` - Target user does not exist
    /// - `Err(AppError::Conflict)` - Overlaps one of the user's slots
    pub async fn create(&self, actor: &User, params: CreateScheduleParams) -> Result<Schedule, AppError> {
        ensure_self_or(actor, params.user_id, Feature::ManageSchedules)?;

        let txn = self.db.begin().await?;
        if UserRepository::new(&txn)
            .find_by_id(params.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let repo = ScheduleRepository::new(&txn);
        if repo
            .has_overlap(params.user_id, params.starts_at, params.ends_at, None)
            .await?
        {
            return Err(AppError::Conflict(
                "Slot overlaps an existing slot".to_string(),
            ));
        }

        let schedule = repo.create(params).await?;
        txn.commit().await?;

        Ok(schedule)
    }

    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        params: UpdateScheduleParams,
    ) -> Result<Schedule, AppError> {
        let txn = self.db.begin().await?;
        let repo = ScheduleRepository::new(&txn);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Schedule not found".to_string()));
        };
        ensure_self_or(actor, existing.user_id, Feature::ManageSchedules)?;

        let starts_at = params.starts_at.unwrap_or(existing.starts_at);
        let ends_at = params.ends_at.unwrap_or(existing.ends_at);
        validate_range(starts_at, ends_at)?;

        if repo
            .has_overlap(existing.user_id, starts_at, ends_at, Some(id))
            .await?
        {
            return Err(AppError::Conflict(
                "Slot overlaps an existing slot".to_string(),
            ));
        }

        let updated = repo
            .update(
                id,
                params.title.unwrap_or(existing.title),
                starts_at,
                ends_at,
                params.note.unwrap_or(existing.note),
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Schedule not found".to_string()))?;
        txn.commit().await?;

        Ok(updated)
    }

    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let repo = ScheduleRepository::new(self.db);
        let Some(existing) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Schedule not found".to_string()));
        };
        ensure_self_or(actor, existing.user_id, Feature::ManageSchedules)?;

        repo.delete(id).await?;
        Ok(())
    }

    /// Slots intersecting `[from, to)`.
    pub async fn get_in_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Schedule>, AppError> {
        validate_range(from, to)?;
        Ok(ScheduleRepository::new(self.db).get_in_range(from, to).await?)
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Schedule>, AppError> {
        Ok(ScheduleRepository::new(self.db).get_by_user(user_id).await?)
    }
}
