pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_project_table;
mod m20260105_000003_create_task_table;
mod m20260106_000004_create_work_session_table;
mod m20260106_000005_create_weekly_hours_table;
mod m20260107_000006_create_weekly_report_table;
mod m20260108_000007_create_reward_table;
mod m20260108_000008_create_purchase_table;
mod m20260109_000009_create_schedule_table;
mod m20260109_000010_create_lab_responsibility_table;
mod m20260110_000011_create_notification_table;
mod m20260110_000012_create_badge_table;
mod m20260110_000013_create_user_badge_table;
mod m20260111_000014_create_issue_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_project_table::Migration),
            Box::new(m20260105_000003_create_task_table::Migration),
            Box::new(m20260106_000004_create_work_session_table::Migration),
            Box::new(m20260106_000005_create_weekly_hours_table::Migration),
            Box::new(m20260107_000006_create_weekly_report_table::Migration),
            Box::new(m20260108_000007_create_reward_table::Migration),
            Box::new(m20260108_000008_create_purchase_table::Migration),
            Box::new(m20260109_000009_create_schedule_table::Migration),
            Box::new(m20260109_000010_create_lab_responsibility_table::Migration),
            Box::new(m20260110_000011_create_notification_table::Migration),
            Box::new(m20260110_000012_create_badge_table::Migration),
            Box::new(m20260110_000013_create_user_badge_table::Migration),
            Box::new(m20260111_000014_create_issue_table::Migration),
        ]
    }
}
