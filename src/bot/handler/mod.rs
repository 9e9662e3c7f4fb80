use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::state::AppState;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
    /// Guild to register commands on; global registration when unset.
    pub guild_id: Option<u64>,
}

impl Handler {
    pub fn new(state: AppState, guild_id: Option<u64>) -> Self {
        Self { state, guild_id }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.guild_id, self.state.geometry()).await;
    }

    /// Called for slash commands and message component presses
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.state, ctx, interaction).await;
    }
}
