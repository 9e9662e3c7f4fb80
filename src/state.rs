//! Shared state handed to the Discord event handler.

use sea_orm::DatabaseConnection;

use crate::{model::map::MapGeometry, render::MapRenderer};

/// Resources shared by every command invocation.
///
/// `DatabaseConnection` is a pool and `MapRenderer` only holds a path and geometry,
/// so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub renderer: MapRenderer,
}

impl AppState {
    pub fn new(db: DatabaseConnection, renderer: MapRenderer) -> Self {
        Self { db, renderer }
    }

    /// World bounds and interior used for both input validation and rendering.
    pub fn geometry(&self) -> MapGeometry {
        *self.renderer.geometry()
    }
}
