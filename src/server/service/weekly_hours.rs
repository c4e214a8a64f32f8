//! Weekly hours service.
//!
//! The reset moves each user's running counter into the history row for the
//! archived week. Each user is handled in their own transaction: the amount read
//! is added to history and then subtracted from the counter, never zeroed, so
//! seconds credited by a session stopped mid-reset stay in the counter for next
//! week.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{user::UserRepository, weekly_hours::WeeklyHoursRepository},
    error::AppError,
    model::weekly_hours::{HoursSummary, WeeklyResetSummary},
    util::time::{is_monday, previous_week_start},
};

pub struct WeeklyHoursService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WeeklyHoursService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Archives every positive counter into `week_start`.
    ///
    /// Running it twice for the same week is harmless: the second run finds the
    /// counters at zero, or adds only what accrued in between.
    ///
    /// # Returns
    /// - `Ok(WeeklyResetSummary)` - Users archived and seconds moved
    /// - `Err(AppError::BadRequest)` - `week_start` is not a Monday
    pub async fn reset(
        &self,
        week_start: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<WeeklyResetSummary, AppError> {
        if !is_monday(week_start) {
            return Err(AppError::BadRequest(format!(
                "week_start {} is not a Monday",
                week_start
            )));
        }

        let user_ids = UserRepository::new(self.db)
            .get_ids_with_weekly_seconds()
            .await?;

        let mut summary = WeeklyResetSummary {
            week_start,
            users_archived: 0,
            total_seconds: 0,
        };

        for user_id in user_ids {
            let txn = self.db.begin().await?;
            let user_repo = UserRepository::new(&txn);

            let Some(user) = user_repo.find_by_id(user_id).await? else {
                continue;
            };
            let seconds = user.weekly_seconds;
            if seconds <= 0 {
                continue;
            }

            WeeklyHoursRepository::new(&txn)
                .add_seconds(user_id, week_start, seconds, now)
                .await?;

            if !user_repo.subtract_weekly_seconds(user_id, seconds).await? {
                tracing::warn!(
                    "Weekly counter for user {} dropped below {} during reset, skipping",
                    user_id,
                    seconds
                );
                txn.rollback().await?;
                continue;
            }

            txn.commit().await?;

            summary.users_archived += 1;
            summary.total_seconds += seconds;
        }

        tracing::info!(
            "Weekly reset for {} archived {} seconds across {} users",
            summary.week_start,
            summary.total_seconds,
            summary.users_archived
        );

        Ok(summary)
    }

    /// Archives into the week before the one containing `now`.
    pub async fn reset_previous_week(
        &self,
        now: DateTime<Utc>,
    ) -> Result<WeeklyResetSummary, AppError> {
        self.reset(previous_week_start(now), now).await
    }

    /// The user's running counter plus their archived weeks.
    pub async fn summary(&self, user_id: i32) -> Result<HoursSummary, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };
        let history = WeeklyHoursRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        Ok(HoursSummary {
            user_id,
            current_seconds: user.weekly_seconds,
            history,
        })
    }
}
