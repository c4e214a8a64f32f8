//! Issue tracker service.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::issue::IssueRepository,
    error::AppError,
    model::{
        access::{permits, Feature},
        issue::{CreateIssueParams, Issue, IssueStatus, UpdateIssueParams},
        user::User,
    },
    service::{ensure_self_or, notification::notify},
};

pub struct IssueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IssueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn report(&self, params: CreateIssueParams) -> Result<Issue, AppError> {
        let issue = IssueRepository::new(self.db).create(params).await?;
        tracing::info!("User {} reported issue {}", issue.reporter_id, issue.id);
        Ok(issue)
    }

    /// Issues visible to the actor: all of them for issue managers, otherwise
    /// the actor's own reports.
    pub async fn list(&self, actor: &User, status: Option<IssueStatus>) -> Result<Vec<Issue>, AppError> {
        let reporter = if permits(actor.role, Feature::ManageIssues) {
            None
        } else {
            Some(actor.id)
        };
        Ok(IssueRepository::new(self.db)
            .get_filtered(reporter, status)
            .await?)
    }

    pub async fn get(&self, actor: &User, id: i32) -> Result<Issue, AppError> {
        let issue = IssueRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Issue not found".to_string()))?;
        ensure_self_or(actor, issue.reporter_id, Feature::ManageIssues)?;
        Ok(issue)
    }

    /// Updates triage fields and tells the reporter when the status changes.
    pub async fn update(&self, id: i32, params: UpdateIssueParams) -> Result<Issue, AppError> {
        let txn = self.db.begin().await?;
        let repo = IssueRepository::new(&txn);

        let Some(before) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Issue not found".to_string()));
        };
        let updated = repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Issue not found".to_string()))?;

        if updated.status != before.status {
            notify(
                &txn,
                updated.reporter_id,
                "Issue updated",
                format!("\"{}\" is now {}.", updated.title, updated.status),
            )
            .await?;
        }
        txn.commit().await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !IssueRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Issue not found".to_string()));
        }
        Ok(())
    }
}
