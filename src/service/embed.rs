//! Embed builders for pearl replies and posts.
//!
//! Text content is assembled by plain functions so it can be checked without going
//! through serenity's builders.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, Timestamp};

use crate::{
    error::{internal::InternalError, AppError},
    model::{color::PearlColor, leaderboard::LeaderboardEntry, map::MapGeometry, pearl::Pearl},
    service::leaderboard::format_leaderboard,
    util::format::add_number_prefix,
};

pub const LEADERBOARD_TITLE: &str = "Weekly Pearl Collection Leaderboard";
pub const LEADERBOARD_COLOR: u32 = 0x00aaff;
pub const PEARL_LIST_COLOR: u32 = 0x00ff00;
pub const HELP_COLOR: u32 = 0x00aaff;

/// Formats a coordinate pair as `(+x, -y)`.
pub fn format_location(x: i32, y: i32) -> String {
    format!("({}, {})", add_number_prefix(x), add_number_prefix(y))
}

/// Converts a chrono time into a Discord embed timestamp.
///
/// # Returns
/// - `Ok(Timestamp)` - Converted timestamp
/// - `Err(AppError::InternalError)` - Time outside Discord's supported range
pub fn discord_timestamp(time: DateTime<Utc>) -> Result<Timestamp, AppError> {
    Timestamp::from_unix_timestamp(time.timestamp()).map_err(|e| {
        AppError::InternalError(InternalError::InvalidDiscordTimestamp {
            timestamp: time.timestamp(),
            reason: e.to_string(),
        })
    })
}

/// Builds the weekly leaderboard embed.
///
/// # Arguments
/// - `entries` - Ranked leaderboard entries
/// - `empty_message` - Description used when nobody recorded a pearl
/// - `now` - Time shown in the embed footer
pub fn build_leaderboard_embed(
    entries: &[LeaderboardEntry],
    empty_message: &str,
    now: DateTime<Utc>,
) -> Result<CreateEmbed, AppError> {
    let description = if entries.is_empty() {
        empty_message.to_string()
    } else {
        format_leaderboard(entries)
    };

    Ok(CreateEmbed::new()
        .title(LEADERBOARD_TITLE)
        .color(LEADERBOARD_COLOR)
        .description(description)
        .timestamp(discord_timestamp(now)?))
}

/// Field name and value for one color group of the pearl list.
pub fn pearl_list_field(color: PearlColor, pearls: &[Pearl]) -> (String, String) {
    let name = format!("{} ({})", color.display_name(), pearls.len());
    let locations = pearls
        .iter()
        .map(|p| format_location(p.x, p.y))
        .collect::<Vec<_>>()
        .join("\n");

    let value = if locations.is_empty() {
        "None".to_string()
    } else {
        locations
    };

    (name, value)
}

/// Builds the pearl list embed with one field per color group.
pub fn build_pearl_list_embed(
    groups: &[(PearlColor, Vec<Pearl>)],
    now: DateTime<Utc>,
) -> Result<CreateEmbed, AppError> {
    let mut embed = CreateEmbed::new()
        .title("Pearl List")
        .color(PEARL_LIST_COLOR)
        .timestamp(discord_timestamp(now)?);

    for (color, pearls) in groups {
        let (name, value) = pearl_list_field(*color, pearls);
        embed = embed.field(name, value, false);
    }

    Ok(embed)
}

/// Usage text for each command, in the order shown by `/pearl-help`.
pub fn help_fields(geometry: &MapGeometry) -> Vec<(&'static str, String)> {
    let range = format!("{} to {}", geometry.world_min, geometry.world_max);

    vec![
        (
            "/add-pearl",
            format!(
                "**Usage:** `/add-pearl x:<X> y:<Y> color:<Color>`\nAdds a pearl to the list.\n• X,Y range: {}\n• Color: one of the predefined colors",
                range
            ),
        ),
        (
            "/clear-pearl",
            format!(
                "**Usage:** `/clear-pearl x:<X> y:<Y>`\nRemoves a pearl at the given coordinates.\n• X,Y range: {}",
                range
            ),
        ),
        (
            "/list-pearls",
            "**Usage:** `/list-pearls [filter-sector:<Sector>] [filter-color:<Color>]`\nDisplays pearls; optional filters:\n• `filter-sector`: (-,+), (+,+), (-,-), (+,-)\n• `filter-color`: color name".to_string(),
        ),
        (
            "/show-map",
            "**Usage:** `/show-map [filter-color:<Color>]`\nDisplays a visual map with pearls marked; optional filter:\n• `filter-color`: color name".to_string(),
        ),
        (
            "/show-leaderboard",
            "**Usage:** `/show-leaderboard`\nDisplays this week's pearl collection leaderboard.".to_string(),
        ),
    ]
}

/// Builds the `/pearl-help` embed.
pub fn build_help_embed(geometry: &MapGeometry, now: DateTime<Utc>) -> Result<CreateEmbed, AppError> {
    let mut embed = CreateEmbed::new()
        .title("Pearl Commands")
        .color(HELP_COLOR)
        .description("Usage and details for available pearl commands")
        .timestamp(discord_timestamp(now)?);

    for (name, value) in help_fields(geometry) {
        embed = embed.field(name, value, false);
    }

    Ok(embed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pearl(x: i32, y: i32) -> Pearl {
        Pearl {
            id: 0,
            x,
            y,
            color: PearlColor::Red,
            submitted_by: "scout".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn formats_locations_with_signs() {
        assert_eq!(format_location(12, -4), "(+12, -4)");
        assert_eq!(format_location(0, 160), "(0, +160)");
    }

    #[test]
    fn builds_list_field_per_color() {
        let (name, value) = pearl_list_field(PearlColor::Red, &[pearl(-4, -9), pearl(3, 0)]);
        assert_eq!(name, "Red (2)");
        assert_eq!(value, "(-4, -9)\n(+3, 0)");
    }

    #[test]
    fn empty_group_shows_none() {
        let (name, value) = pearl_list_field(PearlColor::Cyan, &[]);
        assert_eq!(name, "Cyan (0)");
        assert_eq!(value, "None");
    }

    #[test]
    fn help_uses_configured_range() {
        let geometry = MapGeometry {
            world_min: -50,
            world_max: 75,
            ..MapGeometry::default()
        };
        let fields = help_fields(&geometry);

        assert_eq!(fields[0].0, "/add-pearl");
        assert!(fields[0].1.contains("X,Y range: -50 to 75"));
        assert!(fields[1].1.contains("X,Y range: -50 to 75"));
        assert_eq!(fields.len(), 5);
    }

    #[test]
    fn converts_timestamps() {
        let now = Utc::now();
        assert_eq!(discord_timestamp(now).unwrap().unix_timestamp(), now.timestamp());
    }
}
