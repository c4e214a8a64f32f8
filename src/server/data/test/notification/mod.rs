use crate::server::data::notification::NotificationRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_many;
mod mark_read;
