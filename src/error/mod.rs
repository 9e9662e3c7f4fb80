//! Error types for the bot.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors. Command
//! handlers return it, and the interaction dispatcher logs it before replying with a
//! generic message so no internal detail ever reaches Discord users.

pub mod config;
pub mod internal;
pub mod render;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, render::RenderError};

/// Generic reply sent when a command fails for any reason.
pub const GENERIC_COMMAND_ERROR: &str = "There was an error while executing this command!";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Map rendering failed; the map is unavailable for this request.
    #[error(transparent)]
    RenderErr(#[from] RenderError),

    /// Invalid request error.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected behavior inside the bot itself.
    #[error(transparent)]
    InternalError(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
