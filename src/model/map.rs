//! World and image geometry used to place pearls on the base map.

/// Pixel rectangle of the base image that world coordinates map onto.
///
/// Everything outside it is the map's decorative frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interior {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Interior {
    pub const fn width(&self) -> i64 {
        self.x1 as i64 - self.x0 as i64
    }

    pub const fn height(&self) -> i64 {
        self.y1 as i64 - self.y0 as i64
    }
}

/// Bounds of the world coordinate system and where it lands on the base image.
///
/// The world bounds double as the accepted range for command input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapGeometry {
    pub world_min: i32,
    pub world_max: i32,
    pub interior: Interior,
}

impl MapGeometry {
    pub const DEFAULT_WORLD_MIN: i32 = -160;
    pub const DEFAULT_WORLD_MAX: i32 = 160;
    pub const DEFAULT_INTERIOR: Interior = Interior {
        x0: 51,
        y0: 59,
        x1: 945,
        y1: 898,
    };

    /// Width of the world range. Computed in `i64` so no pair of bounds overflows.
    pub const fn world_span(&self) -> i64 {
        self.world_max as i64 - self.world_min as i64
    }

    /// Whether both coordinates lie inside the inclusive world bounds.
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.world_min && x <= self.world_max && y >= self.world_min && y <= self.world_max
    }
}

impl Default for MapGeometry {
    fn default() -> Self {
        Self {
            world_min: Self::DEFAULT_WORLD_MIN,
            world_max: Self::DEFAULT_WORLD_MAX,
            interior: Self::DEFAULT_INTERIOR,
        }
    }
}
