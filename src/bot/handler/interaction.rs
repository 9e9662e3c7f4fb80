//! Interaction event handler for slash commands.
//!
//! Every command invocation is logged with the invoking user. Failures are logged
//! with their full error, while the user only ever sees the message of a
//! `BadRequest` or the generic failure reply.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, Interaction,
};

use crate::{
    bot::command::{self, PearlCommand},
    error::{AppError, GENERIC_COMMAND_ERROR},
    state::AppState,
};

/// Handles an incoming interaction.
///
/// Only slash commands are dispatched here. Button presses for confirmations are
/// consumed by the collectors waiting on them.
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let Some(pearl_command) = PearlCommand::from_name(&command.data.name) else {
        tracing::warn!("No command matching {} was found.", command.data.name);
        return;
    };

    tracing::info!(
        "{} executed command: /{}",
        command.user.tag(),
        command.data.name
    );

    if let Err(e) = command::run(pearl_command, &ctx, &command, state).await {
        tracing::error!("Error executing command /{}: {}", command.data.name, e);
        report_error(&ctx, &command, &e).await;
    }
}

/// Tells the user a command failed.
///
/// Commands defer before doing any work, so a followup is tried first. If the
/// interaction was never acknowledged that fails and a direct response is sent.
async fn report_error(ctx: &Context, command: &CommandInteraction, error: &AppError) {
    let content = match error {
        AppError::BadRequest(msg) => msg.clone(),
        _ => GENERIC_COMMAND_ERROR.to_string(),
    };

    let followup = CreateInteractionResponseFollowup::new()
        .content(&content)
        .ephemeral(true);

    let Err(followup_err) = command.create_followup(&ctx.http, followup).await else {
        return;
    };

    tracing::debug!("Followup failed, responding directly: {:?}", followup_err);

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    );

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Error sending error message to user: {:?}", e);
    }
}
