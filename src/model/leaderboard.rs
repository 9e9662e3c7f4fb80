//! Leaderboard models.

/// Number of pearls one user recorded within a leaderboard window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub submitted_by: String,
    pub count: u64,
}
