//! Cron jobs for pearl housekeeping.
//!
//! All schedules use UTC, matching the daily pearl reset and the Sunday week start.

pub mod pearl_cleanup;
pub mod weekly_leaderboard;

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{config::Config, error::AppError};

/// Daily at 00:00:00 UTC.
pub const DAILY_CLEANUP_SCHEDULE: &str = "0 0 0 * * *";
/// Sundays at 00:00:00 UTC.
pub const WEEKLY_LEADERBOARD_SCHEDULE: &str = "0 0 0 * * Sun";

/// Starts the pearl scheduler
///
/// Registers two jobs:
/// - Daily cleanup of pearls older than the configured retention
/// - Weekly leaderboard post for the week that just ended
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client for posting the leaderboard
/// - `config`: Retention days and leaderboard channel
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    config: &Config,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let cleanup_db = db.clone();
    let retention_days = config.retention_days;
    let cleanup = Job::new_async(DAILY_CLEANUP_SCHEDULE, move |_uuid, _lock| {
        let db = cleanup_db.clone();

        Box::pin(async move {
            if let Err(e) = pearl_cleanup::run_cleanup(&db, retention_days).await {
                tracing::error!("Error during daily old pearl cleanup: {}", e);
            }
        })
    })?;

    let leaderboard_db = db.clone();
    let channel_id = config.pearl_channel_id;
    let leaderboard = Job::new_async(WEEKLY_LEADERBOARD_SCHEDULE, move |_uuid, _lock| {
        let db = leaderboard_db.clone();
        let http = discord_http.clone();

        Box::pin(async move {
            if let Err(e) = weekly_leaderboard::post_weekly_leaderboard(&db, http, channel_id).await
            {
                tracing::error!("Error posting weekly leaderboard: {}", e);
            }
        })
    })?;

    scheduler.add(cleanup).await?;
    scheduler.add(leaderboard).await?;
    scheduler.start().await?;

    tracing::info!("Pearl scheduler started");

    Ok(())
}
