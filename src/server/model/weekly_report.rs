//! Weekly report domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::weekly_report::{SubmitWeeklyReportDto, UpdateWeeklyReportDto, WeeklyReportDto},
    server::{error::AppError, model::require_text, util::parse::parse_stored},
};

string_enum! {
    /// Reviewed reports are read-only.
    ReportStatus {
        Submitted => "submitted",
        Reviewed => "reviewed",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyReport {
    pub id: i32,
    pub user_id: i32,
    pub week_start: NaiveDate,
    pub summary: String,
    pub plans: Option<String>,
    pub blockers: Option<String>,
    pub status: ReportStatus,
    pub reviewer_id: Option<i32>,
    pub feedback: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WeeklyReport {
    pub fn into_dto(self) -> WeeklyReportDto {
        WeeklyReportDto {
            id: self.id,
            user_id: self.user_id,
            week_start: self.week_start,
            summary: self.summary,
            plans: self.plans,
            blockers: self.blockers,
            status: self.status.to_string(),
            reviewer_id: self.reviewer_id,
            feedback: self.feedback,
            reviewed_at: self.reviewed_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::weekly_report::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            week_start: entity.week_start,
            summary: entity.summary,
            plans: entity.plans,
            blockers: entity.blockers,
            status: parse_stored("weekly_report.status", entity.status)?,
            reviewer_id: entity.reviewer_id,
            feedback: entity.feedback,
            reviewed_at: entity.reviewed_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for submitting a report.
///
/// `week_start` is validated by the service, which also fills in the default.
#[derive(Debug, Clone)]
pub struct SubmitReportParams {
    pub user_id: i32,
    pub week_start: Option<NaiveDate>,
    pub summary: String,
    pub plans: Option<String>,
    pub blockers: Option<String>,
}

impl SubmitReportParams {
    pub fn from_dto(user_id: i32, dto: SubmitWeeklyReportDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id,
            week_start: dto.week_start,
            summary: require_text("summary", dto.summary)?,
            plans: dto.plans,
            blockers: dto.blockers,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReportParams {
    pub summary: Option<String>,
    pub plans: Option<String>,
    pub blockers: Option<String>,
}

impl UpdateReportParams {
    pub fn from_dto(dto: UpdateWeeklyReportDto) -> Result<Self, AppError> {
        Ok(Self {
            summary: dto.summary.map(|s| require_text("summary", s)).transpose()?,
            plans: dto.plans,
            blockers: dto.blockers,
        })
    }
}
