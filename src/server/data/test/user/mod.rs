use crate::server::{
    data::user::UserRepository,
    model::{
        access::{AccountStatus, Role},
        user::CreateUserParam,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod deduct_points;
mod get_all_paginated;
mod subtract_weekly_seconds;
