//! Issue reports.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::issue::{CreateIssueDto, IssueDto, UpdateIssueDto},
    server::{
        error::AppError,
        model::{parse_input, require_text},
        util::parse::parse_stored,
    },
};

string_enum! {
    IssueStatus {
        Open => "open",
        InProgress => "in_progress",
        Resolved => "resolved",
        Closed => "closed",
    }
}

string_enum! {
    IssuePriority {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub id: i32,
    pub reporter_id: i32,
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub assignee_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    pub fn into_dto(self) -> IssueDto {
        IssueDto {
            id: self.id,
            reporter_id: self.reporter_id,
            title: self.title,
            description: self.description,
            status: self.status.to_string(),
            priority: self.priority.to_string(),
            assignee_id: self.assignee_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::issue::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            reporter_id: entity.reporter_id,
            title: entity.title,
            description: entity.description,
            status: parse_stored("issue.status", entity.status)?,
            priority: parse_stored("issue.priority", entity.priority)?,
            assignee_id: entity.assignee_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateIssueParams {
    pub reporter_id: i32,
    pub title: String,
    pub description: String,
    pub priority: IssuePriority,
}

impl CreateIssueParams {
    pub fn from_dto(reporter_id: i32, dto: CreateIssueDto) -> Result<Self, AppError> {
        Ok(Self {
            reporter_id,
            title: require_text("title", dto.title)?,
            description: dto.description,
            priority: match dto.priority {
                Some(priority) => parse_input(&priority)?,
                None => IssuePriority::Medium,
            },
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateIssueParams {
    pub status: Option<IssueStatus>,
    pub priority: Option<IssuePriority>,
    pub assignee_id: Option<Option<i32>>,
}

impl UpdateIssueParams {
    pub fn from_dto(dto: UpdateIssueDto) -> Result<Self, AppError> {
        let assignee_id = if dto.clear_assignee {
            Some(None)
        } else {
            dto.assignee_id.map(Some)
        };
        Ok(Self {
            status: dto.status.as_deref().map(parse_input).transpose()?,
            priority: dto.priority.as_deref().map(parse_input).transpose()?,
            assignee_id,
        })
    }
}
