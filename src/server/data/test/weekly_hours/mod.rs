use crate::server::data::weekly_hours::WeeklyHoursRepository;
use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_seconds;
