//! Discord bot integration.
//!
//! The bot registers the pearl slash commands when it connects and answers them
//! through the service layer. Its HTTP client is shared with the scheduler so the
//! weekly leaderboard can be posted without a second connection to Discord.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is required; slash command interactions arrive without any
//! privileged intent.

pub mod command;
pub mod handler;
pub mod start;
