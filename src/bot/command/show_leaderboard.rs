use chrono::Utc;
use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse};

use crate::{
    error::AppError,
    service::{embed::build_leaderboard_embed, leaderboard::LeaderboardService},
    state::AppState,
};

pub fn register() -> CreateCommand {
    CreateCommand::new("show-leaderboard")
        .description("Displays the pearl collection leaderboard for the current week.")
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> Result<(), AppError> {
    command.defer(&ctx.http).await?;

    let now = Utc::now();
    let entries = LeaderboardService::new(&state.db).weekly(0, now).await?;
    let embed = build_leaderboard_embed(&entries, "No pearls collected yet.", now)?;

    command
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
        .await?;

    Ok(())
}
