//! Weekly report service.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::weekly_report::WeeklyReportRepository,
    error::{auth::AuthError, AppError},
    model::{
        access::Feature,
        user::User,
        weekly_report::{ReportStatus, SubmitReportParams, UpdateReportParams, WeeklyReport},
    },
    service::{ensure_self_or, notification::notify},
    util::time::{is_monday, week_start},
};

pub struct WeeklyReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WeeklyReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits the user's report for a week, defaulting to the week containing `now`.
    ///
    /// # Returns
    /// - `Ok(WeeklyReport)` - The submitted report
    /// - `Err(AppError::BadRequest)` - `week_start` is not a Monday
    /// - `Err(AppError::Conflict)` - A report for that week already exists
    pub async fn submit(
        &self,
        params: SubmitReportParams,
        now: DateTime<Utc>,
    ) -> Result<WeeklyReport, AppError> {
        let week = params.week_start.unwrap_or_else(|| week_start(now));
        if !is_monday(week) {
            return Err(AppError::BadRequest(format!(
                "week_start {} is not a Monday",
                week
            )));
        }

        let repo = WeeklyReportRepository::new(self.db);
        if repo.find_by_user_week(params.user_id, week).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "A report for the week of {} already exists",
                week
            )));
        }

        repo.create(
            params.user_id,
            week,
            params.summary,
            params.plans,
            params.blockers,
        )
        .await
        .map_err(|err| {
            AppError::conflict_on_unique(
                err,
                format!("A report for the week of {} already exists", week),
            )
        })
    }

    /// Gets a report visible to the actor: their own, or any for reviewers.
    pub async fn get(&self, actor: &User, id: i32) -> Result<WeeklyReport, AppError> {
        let report = self.find(id).await?;
        ensure_self_or(actor, report.user_id, Feature::ReviewWeeklyReports)?;
        Ok(report)
    }

    /// Edits the actor's own report while it is still awaiting review.
    pub async fn update(
        &self,
        actor_id: i32,
        id: i32,
        params: UpdateReportParams,
    ) -> Result<WeeklyReport, AppError> {
        let report = self.find(id).await?;
        if report.user_id != actor_id {
            return Err(AuthError::AccessDenied(
                actor_id,
                format!("User attempted to edit weekly report {} of another user", id),
            )
            .into());
        }
        if report.status != ReportStatus::Submitted {
            return Err(AppError::BadRequest(
                "Reviewed reports can no longer be edited".to_string(),
            ));
        }

        WeeklyReportRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Weekly report not found".to_string()))
    }

    /// Marks a submitted report reviewed and notifies its author.
    ///
    /// # Returns
    /// - `Ok(WeeklyReport)` - The reviewed report
    /// - `Err(AppError::NotFound)` - No report with that id
    /// - `Err(AppError::BadRequest)` - The report was already reviewed
    pub async fn review(
        &self,
        reviewer_id: i32,
        id: i32,
        feedback: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<WeeklyReport, AppError> {
        let feedback = feedback
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty());

        let txn = self.db.begin().await?;
        let repo = WeeklyReportRepository::new(&txn);

        let Some(report) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Weekly report not found".to_string()));
        };
        if report.status == ReportStatus::Reviewed {
            return Err(AppError::BadRequest(
                "Weekly report has already been reviewed".to_string(),
            ));
        }

        let reviewed = repo
            .review(id, reviewer_id, feedback, now)
            .await?
            .ok_or_else(|| AppError::NotFound("Weekly report not found".to_string()))?;

        notify(
            &txn,
            reviewed.user_id,
            "Weekly report reviewed",
            format!(
                "Your report for the week of {} has been reviewed.",
                reviewed.week_start
            ),
        )
        .await?;
        txn.commit().await?;

        Ok(reviewed)
    }

    pub async fn get_mine(&self, user_id: i32) -> Result<Vec<WeeklyReport>, AppError> {
        Ok(WeeklyReportRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn get_all(&self, week_start: Option<NaiveDate>) -> Result<Vec<WeeklyReport>, AppError> {
        Ok(WeeklyReportRepository::new(self.db).get_all(week_start).await?)
    }

    async fn find(&self, id: i32) -> Result<WeeklyReport, AppError> {
        WeeklyReportRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Weekly report not found".to_string()))
    }
}
