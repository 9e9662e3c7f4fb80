use std::{path::PathBuf, str::FromStr};

use crate::{
    error::{config::ConfigError, AppError},
    model::map::{Interior, MapGeometry},
};

const DEFAULT_MAP_IMAGE_PATH: &str = "images/balehalla.bmp";
const DEFAULT_RETENTION_DAYS: u32 = 30;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Registers commands on this guild only when set, otherwise globally.
    pub discord_guild_id: Option<u64>,
    /// Channel receiving the weekly leaderboard post.
    pub pearl_channel_id: Option<u64>,

    pub map_image_path: PathBuf,
    pub geometry: MapGeometry,
    pub retention_days: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let world_min = optional_var("WORLD_MIN")?
            .map(|value| parse_var("WORLD_MIN", &value))
            .transpose()?
            .unwrap_or(MapGeometry::DEFAULT_WORLD_MIN);
        let world_max = optional_var("WORLD_MAX")?
            .map(|value| parse_var("WORLD_MAX", &value))
            .transpose()?
            .unwrap_or(MapGeometry::DEFAULT_WORLD_MAX);
        let interior = optional_var("MAP_INTERIOR")?
            .map(|value| parse_interior(&value))
            .transpose()?
            .unwrap_or(MapGeometry::DEFAULT_INTERIOR);

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
            discord_guild_id: optional_var("DISCORD_GUILD_ID")?
                .map(|value| parse_var("DISCORD_GUILD_ID", &value))
                .transpose()?,
            pearl_channel_id: optional_var("PEARL_CHANNEL_ID")?
                .map(|value| parse_var("PEARL_CHANNEL_ID", &value))
                .transpose()?,
            map_image_path: optional_var("MAP_IMAGE_PATH")?
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MAP_IMAGE_PATH)),
            geometry: build_geometry(world_min, world_max, interior)?,
            retention_days: optional_var("PEARL_RETENTION_DAYS")?
                .map(|value| parse_var("PEARL_RETENTION_DAYS", &value))
                .transpose()?
                .unwrap_or(DEFAULT_RETENTION_DAYS),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable that may be absent. Empty values count as absent.
fn optional_var(name: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(value)) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string_lossy().into_owned(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Parses an `x0,y0,x1,y1` interior rectangle.
fn parse_interior(value: &str) -> Result<Interior, ConfigError> {
    let parts = value
        .split(',')
        .map(|part| parse_var::<i32>("MAP_INTERIOR", part))
        .collect::<Result<Vec<_>, _>>()?;

    let &[x0, y0, x1, y1] = parts.as_slice() else {
        return Err(ConfigError::InvalidEnvVar {
            name: "MAP_INTERIOR".to_string(),
            value: value.to_string(),
            reason: "expected four comma separated integers x0,y0,x1,y1".to_string(),
        });
    };

    Ok(Interior { x0, y0, x1, y1 })
}

fn build_geometry(
    world_min: i32,
    world_max: i32,
    interior: Interior,
) -> Result<MapGeometry, ConfigError> {
    if world_max <= world_min {
        return Err(ConfigError::InvalidEnvVar {
            name: "WORLD_MAX".to_string(),
            value: world_max.to_string(),
            reason: format!("must be greater than WORLD_MIN ({})", world_min),
        });
    }

    if world_max.checked_sub(world_min).is_none() {
        return Err(ConfigError::InvalidEnvVar {
            name: "WORLD_MAX".to_string(),
            value: world_max.to_string(),
            reason: format!(
                "world range from WORLD_MIN ({}) must fit in a 32-bit integer",
                world_min
            ),
        });
    }

    let interior_fits = interior.x1.checked_sub(interior.x0).is_some()
        && interior.y1.checked_sub(interior.y0).is_some();
    if !interior_fits {
        return Err(ConfigError::InvalidEnvVar {
            name: "MAP_INTERIOR".to_string(),
            value: format!(
                "{},{},{},{}",
                interior.x0, interior.y0, interior.x1, interior.y1
            ),
            reason: "interior width and height must fit in a 32-bit integer".to_string(),
        });
    }

    if interior.width() <= 0 || interior.height() <= 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: "MAP_INTERIOR".to_string(),
            value: format!(
                "{},{},{},{}",
                interior.x0, interior.y0, interior.x1, interior.y1
            ),
            reason: "interior must have positive width and height".to_string(),
        });
    }

    Ok(MapGeometry {
        world_min,
        world_max,
        interior,
    })
}
