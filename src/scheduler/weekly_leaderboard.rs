use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, CreateMessage},
    http::Http,
};
use std::sync::Arc;

use crate::{
    error::AppError,
    service::{embed::build_leaderboard_embed, leaderboard::LeaderboardService},
    util::date::sunday_start,
};

/// Posts last week's leaderboard to the pearl channel.
///
/// Runs right after the week rolls over, so "last week" is the one that just ended.
/// Does nothing but warn when no channel is configured.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client
/// - `channel_id`: Channel receiving the post
pub async fn post_weekly_leaderboard(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
    channel_id: Option<u64>,
) -> Result<(), AppError> {
    let Some(channel_id) = channel_id else {
        tracing::warn!("PEARL_CHANNEL_ID is not set, skipping weekly leaderboard post");
        return Ok(());
    };

    let now = Utc::now();
    let entries = LeaderboardService::new(db).weekly(1, now).await?;

    tracing::info!(
        "Weekly leaderboard generated for week starting {}: {} users",
        sunday_start(now, 1).to_rfc3339(),
        entries.len()
    );

    let embed = build_leaderboard_embed(&entries, "No pearls collected last week.", now)?;

    ChannelId::new(channel_id)
        .send_message(&discord_http, CreateMessage::new().embed(embed))
        .await?;

    Ok(())
}
