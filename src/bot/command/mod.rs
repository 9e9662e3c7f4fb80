//! Pearl slash commands.
//!
//! Each command lives in its own module exposing `register`, which builds the
//! command definition, and `run`, which answers an invocation. All commands defer
//! their response first and then edit it.

pub mod add_pearl;
pub mod clear_pearl;
pub mod list_pearls;
pub mod options;
pub mod pearl_help;
pub mod show_leaderboard;
pub mod show_map;

use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{error::AppError, model::map::MapGeometry, state::AppState};

/// The slash commands the bot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PearlCommand {
    AddPearl,
    ClearPearl,
    ListPearls,
    ShowMap,
    ShowLeaderboard,
    PearlHelp,
}

impl PearlCommand {
    pub const ALL: [PearlCommand; 6] = [
        PearlCommand::AddPearl,
        PearlCommand::ClearPearl,
        PearlCommand::ListPearls,
        PearlCommand::ShowMap,
        PearlCommand::ShowLeaderboard,
        PearlCommand::PearlHelp,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PearlCommand::AddPearl => "add-pearl",
            PearlCommand::ClearPearl => "clear-pearl",
            PearlCommand::ListPearls => "list-pearls",
            PearlCommand::ShowMap => "show-map",
            PearlCommand::ShowLeaderboard => "show-leaderboard",
            PearlCommand::PearlHelp => "pearl-help",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Builds the command definition sent to Discord.
    pub fn register(self, geometry: &MapGeometry) -> CreateCommand {
        match self {
            PearlCommand::AddPearl => add_pearl::register(geometry),
            PearlCommand::ClearPearl => clear_pearl::register(geometry),
            PearlCommand::ListPearls => list_pearls::register(),
            PearlCommand::ShowMap => show_map::register(),
            PearlCommand::ShowLeaderboard => show_leaderboard::register(),
            PearlCommand::PearlHelp => pearl_help::register(),
        }
    }
}

/// Builds definitions for every command.
pub fn register_commands(geometry: &MapGeometry) -> Vec<CreateCommand> {
    PearlCommand::ALL
        .into_iter()
        .map(|command| command.register(geometry))
        .collect()
}

/// Runs one command invocation.
pub async fn run(
    pearl_command: PearlCommand,
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> Result<(), AppError> {
    match pearl_command {
        PearlCommand::AddPearl => add_pearl::run(ctx, command, state).await,
        PearlCommand::ClearPearl => clear_pearl::run(ctx, command, state).await,
        PearlCommand::ListPearls => list_pearls::run(ctx, command, state).await,
        PearlCommand::ShowMap => show_map::run(ctx, command, state).await,
        PearlCommand::ShowLeaderboard => show_leaderboard::run(ctx, command, state).await,
        PearlCommand::PearlHelp => pearl_help::run(ctx, command, state).await,
    }
}
