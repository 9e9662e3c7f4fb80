//! Ready event handler for bot initialization.
//!
//! The ready event fires after every successful gateway handshake, so command
//! registration here is repeated on reconnect. Discord treats re-registering an
//! identical command set as a no-op.

use serenity::all::{Command, Context, GuildId, Ready};

use crate::{bot::command, model::map::MapGeometry};

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the connection and registers the pearl slash commands, either on the
/// configured guild or globally.
///
/// # Arguments
/// - `ctx` - Discord context for API access
/// - `ready` - Ready event data containing bot user information
/// - `guild_id` - Guild to register commands on, if any
/// - `geometry` - World bounds used for coordinate option limits
pub async fn handle_ready(ctx: Context, ready: Ready, guild_id: Option<u64>, geometry: MapGeometry) {
    tracing::info!("Ready! Logged in as {}", ready.user.tag());

    let commands = command::register_commands(&geometry);
    let count = commands.len();

    let result = match guild_id {
        Some(guild_id) => GuildId::new(guild_id)
            .set_commands(&ctx.http, commands)
            .await
            .map(|_| ()),
        None => Command::set_global_commands(&ctx.http, commands)
            .await
            .map(|_| ()),
    };

    match result {
        Ok(()) => match guild_id {
            Some(guild_id) => {
                tracing::info!("Registered {} commands on guild {}", count, guild_id)
            }
            None => tracing::info!("Registered {} global commands", count),
        },
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
