//! Work session (timer) domain models.

use chrono::{DateTime, Utc};

use crate::model::work_session::{PaginatedWorkSessionsDto, WorkSessionDto};

/// A timer run by one user. Open while `ended_at` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkSession {
    pub id: i32,
    pub user_id: i32,
    pub task_id: Option<i32>,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub duration_seconds: Option<i64>,
}

impl WorkSession {
    pub fn into_dto(self) -> WorkSessionDto {
        WorkSessionDto {
            id: self.id,
            user_id: self.user_id,
            task_id: self.task_id,
            started_at: self.started_at,
            ended_at: self.ended_at,
            duration_seconds: self.duration_seconds,
        }
    }

    pub fn from_entity(entity: entity::work_session::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            task_id: entity.task_id,
            started_at: entity.started_at,
            ended_at: entity.ended_at,
            duration_seconds: entity.duration_seconds,
        }
    }

    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }
}

/// Seconds between `started_at` and `ended_at`, clamped at zero for clock skew.
pub fn elapsed_seconds(started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> i64 {
    (ended_at - started_at).num_seconds().max(0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedWorkSessions {
    pub sessions: Vec<WorkSession>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedWorkSessions {
    pub fn into_dto(self) -> PaginatedWorkSessionsDto {
        PaginatedWorkSessionsDto {
            sessions: self.sessions.into_iter().map(WorkSession::into_dto).collect(),
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
    use chrono::Duration;

    #[test]
    fn elapsed_is_whole_seconds() {
        let start = Utc::now();
        assert_eq!(elapsed_seconds(start, start + Duration::milliseconds(90_500)), 90);
    }

    #[test]
    fn elapsed_never_negative() {
        let start = Utc::now();
        assert_eq!(elapsed_seconds(start, start - Duration::seconds(5)), 0);
    }
}
