//! Map rendering.
//!
//! Paints one marker per pearl onto a fresh copy of the base map and encodes the
//! result as PNG. Rendering is synchronous and CPU bound; async callers should run
//! it on the blocking pool. Each call decodes its own copy of the base image, so
//! concurrent renders share nothing.

pub mod color;
pub mod dot;
pub mod transform;

use std::{io::Cursor, path::PathBuf};

use image::{codecs::png::PngEncoder, ColorType, ImageEncoder, RgbaImage};

use crate::{
    error::render::RenderError,
    model::{map::MapGeometry, pearl::Pearl},
    render::{color::resolve_color, dot::draw_dot, dot::dot_radius, transform::world_to_pixel},
};

/// File name used when the rendered map is attached to a message.
pub const MAP_FILENAME: &str = "pearls-map.png";

/// Renders pearl maps onto a configured base image.
#[derive(Debug, Clone)]
pub struct MapRenderer {
    base_image_path: PathBuf,
    geometry: MapGeometry,
}

impl MapRenderer {
    pub fn new(base_image_path: impl Into<PathBuf>, geometry: MapGeometry) -> Self {
        Self {
            base_image_path: base_image_path.into(),
            geometry,
        }
    }

    pub fn geometry(&self) -> &MapGeometry {
        &self.geometry
    }

    /// Renders the pearls onto the base map and returns PNG bytes.
    ///
    /// Pearls are painted in slice order, so a later pearl covers an earlier one
    /// wherever their markers overlap. Pearls whose markers fall partly or fully
    /// outside the image only paint their visible pixels.
    ///
    /// # Arguments
    /// - `pearls` - Pearls to draw, in paint order
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - PNG encoded map
    /// - `Err(RenderError::Unavailable)` - Base image missing or unreadable
    /// - `Err(RenderError::Encode)` - PNG encoding failed
    pub fn render_map(&self, pearls: &[Pearl]) -> Result<Vec<u8>, RenderError> {
        let mut image = self.load_base()?;
        self.paint_pearls(&mut image, pearls);
        encode_png(&image)
    }

    /// Draws every pearl onto an already loaded image.
    pub fn paint_pearls(&self, image: &mut RgbaImage, pearls: &[Pearl]) {
        let radius = dot_radius(image.width(), image.height());

        for pearl in pearls {
            let (px, py) = world_to_pixel(pearl.x, pearl.y, &self.geometry);
            draw_dot(image, px, py, resolve_color(pearl.color), radius);
        }
    }

    fn load_base(&self) -> Result<RgbaImage, RenderError> {
        let base = image::open(&self.base_image_path).map_err(|source| {
            RenderError::Unavailable {
                path: self.base_image_path.clone(),
                source,
            }
        })?;

        Ok(base.to_rgba8())
    }
}

/// Encodes an RGBA image as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Cursor::new(Vec::new());

    PngEncoder::new(&mut bytes)
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
        .map_err(RenderError::Encode)?;

    Ok(bytes.into_inner())
}
