//! Schedule slot domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::schedule::{CreateScheduleDto, ScheduleDto, UpdateScheduleDto},
    server::{error::AppError, model::require_text},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    /// Inclusive start.
    pub starts_at: DateTime<Utc>,
    /// Exclusive end.
    pub ends_at: DateTime<Utc>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Schedule {
    pub fn into_dto(self) -> ScheduleDto {
        ScheduleDto {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            note: self.note,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::schedule::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            note: entity.note,
            created_at: entity.created_at,
        }
    }
}

/// Rejects empty or inverted ranges.
pub fn validate_range(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Result<(), AppError> {
    if ends_at <= starts_at {
        return Err(AppError::BadRequest(
            "ends_at must be after starts_at".to_string(),
        ));
    }
    Ok(())
}

/// Half-open ranges `[a_start, a_end)` and `[b_start, b_end)` share an instant.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

#[derive(Debug, Clone)]
pub struct CreateScheduleParams {
    pub user_id: i32,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub note: Option<String>,
}

impl CreateScheduleParams {
    /// Builds parameters, defaulting the slot owner to `caller_id`.
    pub fn from_dto(caller_id: i32, dto: CreateScheduleDto) -> Result<Self, AppError> {
        validate_range(dto.starts_at, dto.ends_at)?;
        Ok(Self {
            user_id: dto.user_id.unwrap_or(caller_id),
            title: require_text("title", dto.title)?,
            starts_at: dto.starts_at,
            ends_at: dto.ends_at,
            note: dto.note,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateScheduleParams {
    pub title: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    /// `None` keeps the note, `Some(None)` clears it.
    pub note: Option<Option<String>>,
}

impl UpdateScheduleParams {
    pub fn from_dto(dto: UpdateScheduleDto) -> Result<Self, AppError> {
        Ok(Self {
            title: dto.title.map(|t| require_text("title", t)).transpose()?,
            starts_at: dto.starts_at,
            ends_at: dto.ends_at,
            note: dto.note.map(|note| {
                let note = note.trim().to_string();
                (!note.is_empty()).then_some(note)
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn touching_ranges_do_not_overlap() {
        let t0 = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
        let t1 = t0 + Duration::hours(2);
        let t2 = t1 + Duration::hours(2);
        assert!(!overlaps(t0, t1, t1, t2));
        assert!(overlaps(t0, t2, t1, t2));
    }

    #[test]
    fn rejects_empty_range() {
        let t0 = Utc::now();
        assert!(validate_range(t0, t0).is_err());
        assert!(validate_range(t0, t0 + Duration::minutes(1)).is_ok());
    }
}
