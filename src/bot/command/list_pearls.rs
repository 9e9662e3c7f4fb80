use chrono::Utc;
use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse};

use crate::{
    bot::command::options::{color_filter, color_option, sector_filter, sector_option},
    error::AppError,
    model::pearl::{ListPearlsParam, PearlListing},
    service::{embed::build_pearl_list_embed, pearl::PearlService},
    state::AppState,
};

pub fn register() -> CreateCommand {
    CreateCommand::new("list-pearls")
        .description("Displays a list of all pearls")
        .add_option(sector_option("filter-sector", "Filter pearls by sector"))
        .add_option(color_option("filter-color", "Filter pearls by color", false))
}

/// Lists today's pearls grouped by color.
pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> Result<(), AppError> {
    command.defer(&ctx.http).await?;

    let filter = ListPearlsParam {
        sector: sector_filter(command, "filter-sector")?,
        color: color_filter(command, "filter-color")?,
    };

    let now = Utc::now();
    let listing = PearlService::new(&state.db, state.geometry())
        .list(filter, now)
        .await?;

    let response = match listing {
        PearlListing::Empty => EditInteractionResponse::new().content("No pearls found."),
        PearlListing::NoneInSector(sector) => EditInteractionResponse::new()
            .content(format!("No pearls found in sector {}.", sector.sign_label())),
        PearlListing::NoneWithColor(color) => EditInteractionResponse::new()
            .content(format!("No pearls found with color {}.", color)),
        PearlListing::Grouped(groups) => {
            EditInteractionResponse::new().embed(build_pearl_list_embed(&groups, now)?)
        }
    };

    command.edit_response(&ctx.http, response).await?;

    Ok(())
}
