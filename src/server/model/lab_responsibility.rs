//! On-duty lab responsibility assignments.

use chrono::{DateTime, Utc};

use crate::model::lab_responsibility::{HandoffResultDto, LabResponsibilityDto};

/// One user holding on-duty responsibility for `[starts_at, ends_at)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabResponsibility {
    pub id: i32,
    pub user_id: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub note: Option<String>,
    pub assigned_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl LabResponsibility {
    pub fn into_dto(self) -> LabResponsibilityDto {
        LabResponsibilityDto {
            id: self.id,
            user_id: self.user_id,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            note: self.note,
            assigned_by: self.assigned_by,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::lab_responsibility::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            note: entity.note,
            assigned_by: entity.assigned_by,
            created_at: entity.created_at,
        }
    }

    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.starts_at <= at && at < self.ends_at
    }
}

#[derive(Debug, Clone)]
pub struct AssignParams {
    pub user_id: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub note: Option<String>,
    pub assigned_by: Option<i32>,
}

/// Parameters for handing the current duty to another user.
#[derive(Debug, Clone)]
pub struct HandoffParams {
    pub to_user_id: i32,
    pub note: Option<String>,
    pub handed_by: i32,
}

#[derive(Debug, Clone)]
pub struct HandoffResult {
    /// The previous assignment, now ending at the hand-off instant. `None` when
    /// it would have become empty and was removed instead.
    pub previous: Option<LabResponsibility>,
    pub current: LabResponsibility,
}

impl HandoffResult {
    pub fn into_dto(self) -> HandoffResultDto {
        HandoffResultDto {
            previous: self.previous.map(LabResponsibility::into_dto),
            current: self.current.into_dto(),
        }
    }
}
