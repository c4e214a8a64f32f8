use crate::server::{
    data::reward::{PurchaseRepository, RewardRepository},
    model::reward::PurchaseStatus,
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod resolve;
mod take_stock;
