use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{error::AppError, service::pearl::PearlService};

/// Deletes pearls older than `retention_days` days before today.
///
/// # Returns
/// - `Ok(u64)`: Number of pearls removed
/// - `Err(AppError)`: Database error
pub async fn run_cleanup(db: &DatabaseConnection, retention_days: u32) -> Result<u64, AppError> {
    // Geometry only bounds new pearls, so the default is fine for cleanup
    let removed = PearlService::new(db, Default::default())
        .cleanup(retention_days, Utc::now())
        .await?;

    tracing::info!("Daily old pearl cleanup executed. Removed {} pearls.", removed);

    Ok(removed)
}
