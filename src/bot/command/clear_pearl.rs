use chrono::Utc;
use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse};

use crate::{
    bot::command::options::{coordinate_option, required_coordinate},
    error::AppError,
    model::map::MapGeometry,
    service::pearl::PearlService,
    state::AppState,
    util::format::add_number_prefix,
};

pub fn register(geometry: &MapGeometry) -> CreateCommand {
    CreateCommand::new("clear-pearl")
        .description("Removes a pearl from the list.")
        .add_option(coordinate_option("x", "The X coordinate of the pearl", geometry))
        .add_option(coordinate_option("y", "The Y coordinate of the pearl", geometry))
}

/// Removes today's pearl at the given coordinates.
pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> Result<(), AppError> {
    command.defer(&ctx.http).await?;

    let missing = "Both X and Y coordinates are required.";
    let x = required_coordinate(command, "x", missing)?;
    let y = required_coordinate(command, "y", missing)?;

    let cleared = PearlService::new(&state.db, state.geometry())
        .clear(x, y, Utc::now())
        .await?;

    command
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().content(clear_message(x, y, cleared)),
        )
        .await?;

    Ok(())
}

fn clear_message(x: i32, y: i32, cleared: bool) -> String {
    let location = format!("(X: {}, Y: {})", add_number_prefix(x), add_number_prefix(y));
    if cleared {
        format!("Cleared pearl at {}.", location)
    } else {
        format!("No pearl found at {}.", location)
    }
}
