use chrono::Utc;
use serenity::all::{
    CommandInteraction, Context, CreateAttachment, CreateCommand, EditInteractionResponse,
};

use crate::{
    bot::command::options::{color_filter, color_option},
    error::AppError,
    render::MAP_FILENAME,
    service::map::{MapService, MAP_UNAVAILABLE},
    state::AppState,
};

const NO_PEARLS: &str = "No pearls found.";

pub fn register() -> CreateCommand {
    CreateCommand::new("show-map")
        .description("Displays a map of today's pearls")
        .add_option(color_option("filter-color", "Filter pearls by color", false))
}

/// Renders today's pearls onto the map and attaches the image.
pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> Result<(), AppError> {
    command.defer(&ctx.http).await?;

    let color = color_filter(command, "filter-color")?;

    let rendered = MapService::new(&state.db, &state.renderer)
        .render_today(color, Utc::now())
        .await;

    let response = match map_reply(rendered)? {
        MapReply::Image(bytes) => EditInteractionResponse::new()
            .new_attachment(CreateAttachment::bytes(bytes, MAP_FILENAME)),
        MapReply::Text(content) => EditInteractionResponse::new().content(content),
    };

    command.edit_response(&ctx.http, response).await?;

    Ok(())
}

/// Reply to a `/show-map` invocation.
#[derive(Debug, PartialEq)]
enum MapReply {
    /// PNG bytes attached as `pearls-map.png`.
    Image(Vec<u8>),
    Text(&'static str),
}

/// Decides the reply for a render outcome.
///
/// A render failure is answered with its own message rather than the generic
/// command error. Any other error is passed on to the dispatcher.
fn map_reply(rendered: Result<Option<Vec<u8>>, AppError>) -> Result<MapReply, AppError> {
    match rendered {
        Ok(Some(bytes)) => Ok(MapReply::Image(bytes)),
        Ok(None) => Ok(MapReply::Text(NO_PEARLS)),
        Err(e @ (AppError::RenderErr(_) | AppError::InternalError(_))) => {
            tracing::error!("Failed to render pearl map: {}", e);
            Ok(MapReply::Text(MAP_UNAVAILABLE))
        }
        Err(e) => Err(e),
    }
}
