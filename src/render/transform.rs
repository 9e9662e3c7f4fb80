//! World to pixel coordinate transform.

use crate::model::map::MapGeometry;

/// Maps a world coordinate pair onto the base image's interior rectangle.
///
/// `world_min` lands on the interior's first pixel and `world_max` on its last
/// (`x0 + width - 1`), so the mapped range is exactly the interior's pixel
/// columns and rows. The y axis is not flipped: larger world y is lower on
/// the image.
///
/// Coordinates outside the world bounds are not rejected. They extrapolate
/// past the interior, and the rasterizer skips whatever ends up off-canvas.
///
/// # Arguments
/// - `x`, `y` - World coordinates
/// - `geometry` - World bounds and interior rectangle
///
/// # Returns
/// - `(px, py)` - Pixel center on the base image
pub fn world_to_pixel(x: i32, y: i32, geometry: &MapGeometry) -> (i32, i32) {
    let span = geometry.world_span() as f64;
    let interior = geometry.interior;

    let fx = f64::from(x) - f64::from(geometry.world_min);
    let fy = f64::from(y) - f64::from(geometry.world_min);

    let px = f64::from(interior.x0) + (fx / span) * (interior.width() - 1) as f64;
    let py = f64::from(interior.y0) + (fy / span) * (interior.height() - 1) as f64;

    (round_half_up(px), round_half_up(py))
}

/// Rounds with ties toward positive infinity.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
