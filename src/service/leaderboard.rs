use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::pearl::PearlRepository, error::AppError, model::leaderboard::LeaderboardEntry,
    util::date::sunday_start,
};

pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ranks users by pearls recorded during one Sunday-to-Sunday week.
    ///
    /// # Arguments
    /// - `weeks_back` - 0 for the current week, 1 for the week before, and so on
    /// - `now` - Current time
    ///
    /// # Returns
    /// - `Ok(Vec<LeaderboardEntry>)` - Entries sorted by count descending, then name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn weekly(
        &self,
        weeks_back: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<LeaderboardEntry>, AppError> {
        let start = sunday_start(now, weeks_back);
        let end = start + Duration::weeks(1);

        let repo = PearlRepository::new(self.db);
        Ok(repo.count_by_user_between(start, end).await?)
    }
}

/// Formats entries as `"{rank}. {user} - {count}"` lines, ranks starting at 1.
///
/// Returns an empty string for no entries.
pub fn format_leaderboard(entries: &[LeaderboardEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| format!("{}. {} - {}", index + 1, entry.submitted_by, entry.count))
        .collect::<Vec<_>>()
        .join("\n")
}
