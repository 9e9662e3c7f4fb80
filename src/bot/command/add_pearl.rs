use chrono::Utc;
use serenity::all::{
    ButtonStyle, CommandInteraction, ComponentInteraction, Context, CreateActionRow, CreateButton,
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse,
};
use std::time::Duration;

use crate::{
    bot::command::options::{color_option, coordinate_option, required_coordinate, string_value},
    error::AppError,
    model::{
        color::PearlColor,
        map::MapGeometry,
        pearl::{AddPearlOutcome, CreatePearlParam},
    },
    service::{embed::format_location, pearl::PearlService},
    state::AppState,
};

const CONFIRM_TIMEOUT: Duration = Duration::from_secs(60);

pub fn register(geometry: &MapGeometry) -> CreateCommand {
    CreateCommand::new("add-pearl")
        .description("Adds a pearl to the list.")
        .add_option(coordinate_option("x", "The X coordinate of the pearl", geometry))
        .add_option(coordinate_option("y", "The Y coordinate of the pearl", geometry))
        .add_option(color_option("color", "The color of the pearl", true))
}

/// Records a pearl, asking for confirmation when yesterday had the same one.
pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> Result<(), AppError> {
    command.defer(&ctx.http).await?;

    let x = required_coordinate(command, "x", "X coordinate is required.")?;
    let y = required_coordinate(command, "y", "Y coordinate is required.")?;
    let color = string_value(command, "color")
        .and_then(PearlColor::from_name)
        .ok_or_else(|| AppError::BadRequest("Color is required.".to_string()))?;

    let param = CreatePearlParam {
        x,
        y,
        color,
        submitted_by: command.user.tag(),
    };

    let service = PearlService::new(&state.db, state.geometry());
    let location = format_location(x, y);

    let content = match service.add(param.clone(), Utc::now()).await? {
        AddPearlOutcome::Added(_) => added_message(color, &location),
        AddPearlOutcome::AlreadyExists => already_exists_message(&location),
        AddPearlOutcome::NeedsConfirmation => {
            return confirm_and_add(ctx, command, &service, param, &location).await;
        }
    };

    command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    Ok(())
}

/// Asks the invoking user whether to add a pearl that was also recorded yesterday.
///
/// Only the invoking user's press counts. No press within the timeout leaves the
/// pearl unrecorded.
async fn confirm_and_add(
    ctx: &Context,
    command: &CommandInteraction,
    service: &PearlService<'_>,
    param: CreatePearlParam,
    location: &str,
) -> Result<(), AppError> {
    let yes_id = format!("prev_yes_{}", command.id);
    let no_id = format!("prev_no_{}", command.id);

    let row = CreateActionRow::Buttons(vec![
        CreateButton::new(&yes_id)
            .label("Yes")
            .style(ButtonStyle::Success),
        CreateButton::new(&no_id)
            .label("No")
            .style(ButtonStyle::Danger),
    ]);

    let prompt = format!(
        "There is a {} pearl recorded at {} in yesterday's data. Are you sure you wish to add to today?",
        param.color, location
    );
    let message = command
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new()
                .content(prompt)
                .components(vec![row]),
        )
        .await?;

    let (filter_yes, filter_no) = (yes_id.clone(), no_id.clone());
    let press = message
        .await_component_interaction(&ctx.shard)
        .author_id(command.user.id)
        .filter(move |press: &ComponentInteraction| {
            press.data.custom_id == filter_yes || press.data.custom_id == filter_no
        })
        .timeout(CONFIRM_TIMEOUT)
        .await;

    let Some(press) = press else {
        tracing::debug!("Add confirmation for {} timed out", location);
        command
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new()
                    .content("An error occurred or no response received. Pearl not added.")
                    .components(vec![]),
            )
            .await?;
        return Ok(());
    };

    if press.data.custom_id == no_id {
        acknowledge(ctx, &press, "OK - not adding the pearl.").await?;
        command
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new()
                    .content(format!("Add cancelled for {}.", location))
                    .components(vec![]),
            )
            .await?;
        return Ok(());
    }

    acknowledge(ctx, &press, "OK - Adding the pearl.").await?;

    let color = param.color;
    let content = match service.add_confirmed(param, Utc::now()).await? {
        AddPearlOutcome::Added(_) => added_message(color, location),
        _ => already_exists_message(location),
    };

    command
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new()
                .content(content)
                .components(vec![]),
        )
        .await?;

    Ok(())
}

async fn acknowledge(ctx: &Context, press: &ComponentInteraction, content: &str) -> Result<(), AppError> {
    press
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}

fn added_message(color: PearlColor, location: &str) -> String {
    format!("Added a {} pearl at {}.", color, location)
}

fn already_exists_message(location: &str) -> String {
    format!("A pearl already exists at {}.", location)
}
