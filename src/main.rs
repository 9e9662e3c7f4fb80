mod bot;
mod config;
mod data;
mod error;
mod model;
mod render;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use crate::{config::Config, error::AppError, render::MapRenderer, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let renderer = MapRenderer::new(config.map_image_path.clone(), config.geometry);
    let state = AppState::new(db.clone(), renderer);

    tracing::info!("Starting pearl bot");

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(&config, state).await?;

    scheduler::start_scheduler(db, discord_http, &config).await?;

    bot::start::start_bot(bot_client).await
}
