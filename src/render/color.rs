//! Color resolution for pearl dots.

use crate::model::color::{PearlColor, Rgb};

/// Resolves a pearl color to the RGB value drawn on the map.
pub const fn resolve_color(color: PearlColor) -> Rgb {
    color.rgb()
}

/// Resolves free-form color text to an RGB value.
///
/// After trimming and dropping one leading `#`, the first rule that matches wins:
/// 1. a color name, ignoring case
/// 2. all digits, read as a decimal packed value
/// 3. exactly six hex digits
///
/// Anything else, including a decimal value too large to parse, is white.
pub fn resolve_color_str(value: &str) -> Rgb {
    let value = value.trim();
    let value = value.strip_prefix('#').unwrap_or(value);

    if let Some(color) = PearlColor::from_name_ignore_case(value) {
        return color.rgb();
    }

    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        return match value.parse::<u64>() {
            Ok(packed) => Rgb::from_packed((packed & 0xff_ffff) as u32),
            Err(_) => Rgb::WHITE,
        };
    }

    if value.len() == 6 && value.bytes().all(|b| b.is_ascii_hexdigit()) {
        if let Ok(packed) = u32::from_str_radix(value, 16) {
            return Rgb::from_packed(packed);
        }
    }

    Rgb::WHITE
}
