use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::weekly_hours::WeeklyHoursService};

/// Starts the weekly hours reset scheduler.
///
/// On every tick of `schedule` (Mondays at midnight UTC by default) each user's
/// running counter is archived into the week that just ended.
///
/// # Arguments
/// - `db`: Database connection
/// - `schedule`: Six-field cron expression, seconds first
pub async fn start_scheduler(db: DatabaseConnection, schedule: &str) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = run_weekly_reset(&db).await {
                tracing::error!("Error running weekly hours reset: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Weekly hours reset scheduled ({})", schedule);

    Ok(())
}

async fn run_weekly_reset(db: &DatabaseConnection) -> Result<(), AppError> {
    let summary = WeeklyHoursService::new(db)
        .reset_previous_week(Utc::now())
        .await?;

    tracing::info!(
        "Scheduled weekly reset archived {} users ({} seconds) into week {}",
        summary.users_archived,
        summary.total_seconds,
        summary.week_start
    );

    Ok(())
}
