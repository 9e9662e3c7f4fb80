use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    error::{internal::InternalError, AppError},
    model::{color::PearlColor, pearl::Pearl},
    render::MapRenderer,
    service::pearl::PearlService,
};

/// Reply used when the map cannot be rendered.
pub const MAP_UNAVAILABLE: &str = "An error occurred while generating the map.";

pub struct MapService<'a> {
    db: &'a DatabaseConnection,
    renderer: &'a MapRenderer,
}

impl<'a> MapService<'a> {
    pub fn new(db: &'a DatabaseConnection, renderer: &'a MapRenderer) -> Self {
        Self { db, renderer }
    }

    /// Loads today's pearls and renders them onto the base map.
    ///
    /// # Arguments
    /// - `color` - Only draw pearls of this color
    /// - `now` - Current time
    ///
    /// # Returns
    /// - `Ok(None)` - No pearls to draw
    /// - `Ok(Some(bytes))` - PNG encoded map
    /// - `Err(AppError::RenderErr)` - Base image unavailable or encoding failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn render_today(
        &self,
        color: Option<PearlColor>,
        now: DateTime<Utc>,
    ) -> Result<Option<Vec<u8>>, AppError> {
        let pearls = PearlService::new(self.db, *self.renderer.geometry())
            .map_pearls(color, now)
            .await?;

        if pearls.is_empty() {
            return Ok(None);
        }

        self.render(pearls).await.map(Some)
    }

    /// Renders pearls on the blocking thread pool.
    pub async fn render(&self, pearls: Vec<Pearl>) -> Result<Vec<u8>, AppError> {
        let renderer = self.renderer.clone();
        let count = pearls.len();

        let bytes = tokio::task::spawn_blocking(move || renderer.render_map(&pearls))
            .await
            .map_err(InternalError::from)??;

        tracing::debug!("Rendered map with {} pearls ({} bytes)", count, bytes.len());

        Ok(bytes)
    }
}
