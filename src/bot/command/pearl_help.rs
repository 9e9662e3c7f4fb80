use chrono::Utc;
use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse};

use crate::{error::AppError, service::embed::build_help_embed, state::AppState};

pub fn register() -> CreateCommand {
    CreateCommand::new("pearl-help").description("Displays help information for pearl commands.")
}

/// Replies with the command usage embed, visible only to the caller.
pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> Result<(), AppError> {
    command.defer_ephemeral(&ctx.http).await?;

    let embed = build_help_embed(&state.geometry(), Utc::now())?;

    command
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
        .await?;

    Ok(())
}
