use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};
use std::sync::Arc;

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Builds the Discord client and returns it with its HTTP handle.
///
/// The HTTP handle stays usable after the client is moved into its own task, so
/// scheduled jobs can post messages through it.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and optional guild
/// - `state` - Shared state passed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP client
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(config: &Config, state: AppState) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(state, config.discord_guild_id);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Runs the Discord client until it shuts down.
///
/// Should be called from within a `tokio::spawn` task since it blocks until the
/// gateway connection ends.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
