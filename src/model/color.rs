//! Pearl colors and their RGB values.
//!
//! `PearlColor` is the closed set of colors a pearl can be recorded with. Every
//! variant carries its RGB triple, so resolving a known color never touches a
//! lookup table or fails.

use std::fmt;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::from_packed(0xffffff);
    pub const BLACK: Rgb = Rgb::from_packed(0x000000);

    /// Decomposes a packed `0xRRGGBB` value. Bits above the low 24 are ignored.
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

/// The colors a pearl can be recorded with.
///
/// Variant order is the display order used when grouping pearls by color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PearlColor {
    White,
    Black,
    Red,
    Yellow,
    Green,
    Blue,
    Cyan,
    Magenta,
}

impl PearlColor {
    /// All colors in display order.
    pub const ALL: [PearlColor; 8] = [
        PearlColor::White,
        PearlColor::Black,
        PearlColor::Red,
        PearlColor::Yellow,
        PearlColor::Green,
        PearlColor::Blue,
        PearlColor::Cyan,
        PearlColor::Magenta,
    ];

    /// Returns the RGB value drawn for this color.
    pub const fn rgb(self) -> Rgb {
        match self {
            PearlColor::White => Rgb::from_packed(0xffffff),
            PearlColor::Black => Rgb::from_packed(0x000000),
            PearlColor::Red => Rgb::from_packed(0xff0000),
            PearlColor::Yellow => Rgb::from_packed(0xffff00),
            PearlColor::Green => Rgb::from_packed(0x00ff00),
            PearlColor::Blue => Rgb::from_packed(0x0000ff),
            PearlColor::Cyan => Rgb::from_packed(0x00ffff),
            PearlColor::Magenta => Rgb::from_packed(0xff00ff),
        }
    }

    /// Lowercase name used for storage and command option values.
    pub const fn name(self) -> &'static str {
        match self {
            PearlColor::White => "white",
            PearlColor::Black => "black",
            PearlColor::Red => "red",
            PearlColor::Yellow => "yellow",
            PearlColor::Green => "green",
            PearlColor::Blue => "blue",
            PearlColor::Cyan => "cyan",
            PearlColor::Magenta => "magenta",
        }
    }

    /// Capitalized name shown in command choices and embed field titles.
    pub const fn display_name(self) -> &'static str {
        match self {
            PearlColor::White => "White",
            PearlColor::Black => "Black",
            PearlColor::Red => "Red",
            PearlColor::Yellow => "Yellow",
            PearlColor::Green => "Green",
            PearlColor::Blue => "Blue",
            PearlColor::Cyan => "Cyan",
            PearlColor::Magenta => "Magenta",
        }
    }

    /// Matches a name exactly as stored, case-sensitive.
    ///
    /// Used for command filters, whose values always come from the fixed choice list.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.name() == name)
    }

    /// Matches a name ignoring ASCII case.
    pub fn from_name_ignore_case(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }

    /// Finds the named color with exactly this RGB value.
    pub fn from_rgb(rgb: Rgb) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.rgb() == rgb)
    }
}

impl fmt::Display for PearlColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
