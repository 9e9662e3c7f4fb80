//! Shared option builders and readers for the pearl commands.

use serenity::all::{CommandInteraction, CommandOptionType, CreateCommandOption};

use crate::{
    error::AppError,
    model::{color::PearlColor, map::MapGeometry, pearl::PearlSector},
};

/// Integer coordinate option bounded by the world range.
///
/// Serenity's integer bound setters only take `u64`, so the bounds go through the
/// number setters. Both write the same `min_value`/`max_value` fields and Discord
/// applies them to integer options.
pub fn coordinate_option(name: &str, description: &str, geometry: &MapGeometry) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, name, description)
        .required(true)
        .min_number_value(f64::from(geometry.world_min))
        .max_number_value(f64::from(geometry.world_max))
}

/// String option offering every pearl color as a choice.
pub fn color_option(name: &str, description: &str, required: bool) -> CreateCommandOption {
    PearlColor::ALL.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, name, description).required(required),
        |option, color| option.add_string_choice(color.display_name(), color.name()),
    )
}

/// String option offering the four sector sign labels.
pub fn sector_option(name: &str, description: &str) -> CreateCommandOption {
    PearlSector::ALL.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, name, description).required(false),
        |option, sector| option.add_string_choice(sector.sign_label(), sector.sign_label()),
    )
}

pub fn integer_value(command: &CommandInteraction, name: &str) -> Option<i64> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_i64())
}

pub fn string_value<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
}

/// Reads a required coordinate.
///
/// # Returns
/// - `Ok(i32)` - Coordinate value
/// - `Err(AppError::BadRequest)` - Option missing or outside `i32`
pub fn required_coordinate(
    command: &CommandInteraction,
    name: &str,
    missing_message: &str,
) -> Result<i32, AppError> {
    let value = integer_value(command, name)
        .ok_or_else(|| AppError::BadRequest(missing_message.to_string()))?;

    i32::try_from(value)
        .map_err(|_| AppError::BadRequest(format!("Coordinate {} is out of range.", value)))
}

/// Reads an optional color filter; names match exactly as stored.
pub fn color_filter(command: &CommandInteraction, name: &str) -> Result<Option<PearlColor>, AppError> {
    string_value(command, name)
        .map(|value| {
            PearlColor::from_name(value)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown color {}.", value)))
        })
        .transpose()
}

/// Reads an optional sector filter given as a sign label such as `(+,-)`.
pub fn sector_filter(command: &CommandInteraction, name: &str) -> Result<Option<PearlSector>, AppError> {
    string_value(command, name)
        .map(|value| {
            PearlSector::from_sign_label(value)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown sector {}.", value)))
        })
        .transpose()
}
