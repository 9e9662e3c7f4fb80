//! Service layer for business logic and orchestration.
//!
//! Services sit between the Discord command handlers and the repository layer. They
//! apply the pearl rules (world bounds, one pearl per location per day, yesterday
//! confirmation) and build the embeds the bot sends.

pub mod embed;
pub mod leaderboard;
pub mod map;
pub mod pearl;
