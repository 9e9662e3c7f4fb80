//! Pearl marker rasterization.
//!
//! A marker is a solid black disk with a smaller colored disk drawn over it,
//! leaving a two pixel ring. Disks are hard-edged: a pixel at offset `(dx, dy)`
//! belongs to a disk of radius `r` when `dx² + dy² <= r²`.

use image::{Rgba, RgbaImage};

use crate::model::color::Rgb;

pub const MIN_DOT_RADIUS: u32 = 4;
pub const BORDER_WIDTH: u32 = 2;

/// Dot radius for an image of the given size, at least [`MIN_DOT_RADIUS`].
pub fn dot_radius(width: u32, height: u32) -> u32 {
    let scaled = (f64::from(width.min(height)) / 128.0 + 0.5).floor() as u32;
    scaled.max(MIN_DOT_RADIUS)
}

/// Draws one pearl marker centered on `(cx, cy)`.
///
/// Pixels falling outside the image are skipped, so centers near or beyond the
/// edge only draw their visible part.
pub fn draw_dot(image: &mut RgbaImage, cx: i32, cy: i32, color: Rgb, radius: u32) {
    fill_disk(image, cx, cy, radius + BORDER_WIDTH, Rgb::BLACK);
    fill_disk(image, cx, cy, radius, color);
}

/// Fills every in-bounds pixel within `radius` of `(cx, cy)`.
pub fn fill_disk(image: &mut RgbaImage, cx: i32, cy: i32, radius: u32, color: Rgb) {
    let (width, height) = (i64::from(image.width()), i64::from(image.height()));
    let r = i64::from(radius);
    let r2 = r * r;
    let pixel = Rgba([color.r, color.g, color.b, 255]);

    for dy in -r..=r {
        let py = i64::from(cy) + dy;
        if py < 0 || py >= height {
            continue;
        }
        for dx in -r..=r {
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let px = i64::from(cx) + dx;
            if px < 0 || px >= width {
                continue;
            }
            image.put_pixel(px as u32, py as u32, pixel);
        }
    }
}
