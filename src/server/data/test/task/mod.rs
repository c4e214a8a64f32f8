use crate::server::{data::task::TaskRepository, model::task::TaskStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_project;
mod next_position;
