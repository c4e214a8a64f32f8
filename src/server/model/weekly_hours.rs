//! Weekly hours history and reset results.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::weekly_hours::{HoursSummaryDto, WeeklyHoursDto, WeeklyResetDto};

/// Seconds archived for one user and one week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyHours {
    pub user_id: i32,
    /// Monday of the archived week.
    pub week_start: NaiveDate,
    pub seconds: i64,
    /// Last time seconds were added to this row.
    pub archived_at: DateTime<Utc>,
}

impl WeeklyHours {
    pub fn into_dto(self) -> WeeklyHoursDto {
        WeeklyHoursDto {
            week_start: self.week_start,
            seconds: self.seconds,
            archived_at: self.archived_at,
        }
    }

    pub fn from_entity(entity: entity::weekly_hours::Model) -> Self {
        Self {
            user_id: entity.user_id,
            week_start: entity.week_start,
            seconds: entity.seconds,
            archived_at: entity.archived_at,
        }
    }
}

/// Running counter plus archived weeks, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct HoursSummary {
    pub user_id: i32,
    pub current_seconds: i64,
    pub history: Vec<WeeklyHours>,
}

impl HoursSummary {
    pub fn into_dto(self) -> HoursSummaryDto {
        HoursSummaryDto {
            user_id: self.user_id,
            current_seconds: self.current_seconds,
            history: self.history.into_iter().map(WeeklyHours::into_dto).collect(),
        }
    }
}

/// Outcome of one reset run.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyResetSummary {
    pub week_start: NaiveDate,
    /// Users whose counter was positive and got archived.
    pub users_archived: u64,
    pub total_seconds: i64,
}

impl WeeklyResetSummary {
    pub fn into_dto(self) -> WeeklyResetDto {
        WeeklyResetDto {
            week_start: self.week_start,
            users_archived: self.users_archived,
            total_seconds: self.total_seconds,
        }
    }
}
