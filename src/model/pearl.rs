//! Pearl domain models and parameter types.
//!
//! Pearls are converted from entity models at the repository boundary. The
//! sector is never stored on the domain model; it is derived from the
//! coordinates whenever it is needed, so it can never disagree with them.

use chrono::{DateTime, Utc};

use crate::{model::color::PearlColor, render::color::resolve_color_str};

/// One of the four quadrants of the world map.
///
/// World y grows downward on the rendered map, so a non-negative y lies in the
/// bottom half and a non-negative x in the right half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PearlSector {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl PearlSector {
    pub const ALL: [PearlSector; 4] = [
        PearlSector::BottomLeft,
        PearlSector::BottomRight,
        PearlSector::TopLeft,
        PearlSector::TopRight,
    ];

    /// Classifies a coordinate pair by sign, counting zero as positive.
    pub const fn from_coordinates(x: i32, y: i32) -> Self {
        match (x >= 0, y >= 0) {
            (false, false) => PearlSector::TopLeft,
            (true, false) => PearlSector::TopRight,
            (false, true) => PearlSector::BottomLeft,
            (true, true) => PearlSector::BottomRight,
        }
    }

    /// Label written to the `sector` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            PearlSector::TopLeft => "top_left",
            PearlSector::TopRight => "top_right",
            PearlSector::BottomLeft => "bottom_left",
            PearlSector::BottomRight => "bottom_right",
        }
    }

    /// Sign label shown to users, `(sign of x, sign of y)`.
    pub const fn sign_label(self) -> &'static str {
        match self {
            PearlSector::TopLeft => "(-,-)",
            PearlSector::TopRight => "(+,-)",
            PearlSector::BottomLeft => "(-,+)",
            PearlSector::BottomRight => "(+,+)",
        }
    }

    /// Parses a sign label such as `(+,-)`.
    pub fn from_sign_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|sector| sector.sign_label() == label)
    }
}

/// A pearl with full data from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Pearl {
    pub id: i32,
    pub x: i32,
    pub y: i32,
    pub color: PearlColor,
    /// Name of the Discord user who recorded the pearl.
    pub submitted_by: String,
    pub created_at: DateTime<Utc>,
}

impl Pearl {
    /// Converts an entity model to a pearl.
    ///
    /// Stored color text that is not one of the named colors goes through the
    /// textual color ladder (`#RRGGBB`, decimal, bare hex). A value that still
    /// does not land on a named color degrades to white rather than failing, so
    /// one malformed row never hides the rest.
    pub fn from_entity(entity: entity::pearl::Model) -> Self {
        let color = PearlColor::from_name_ignore_case(entity.color.trim())
            .or_else(|| PearlColor::from_rgb(resolve_color_str(&entity.color)))
            .unwrap_or(PearlColor::White);

        Self {
            id: entity.id,
            x: entity.x,
            y: entity.y,
            color,
            submitted_by: entity.submitted_by,
            created_at: entity.created_at,
        }
    }

    pub const fn sector(&self) -> PearlSector {
        PearlSector::from_coordinates(self.x, self.y)
    }
}

/// Parameters for recording a new pearl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePearlParam {
    pub x: i32,
    pub y: i32,
    pub color: PearlColor,
    pub submitted_by: String,
}

/// Filters accepted when listing pearls. Both are optional and combine with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListPearlsParam {
    pub sector: Option<PearlSector>,
    pub color: Option<PearlColor>,
}

/// Result of an add request.
#[derive(Debug, Clone, PartialEq)]
pub enum AddPearlOutcome {
    /// The pearl was stored.
    Added(Pearl),
    /// A pearl is already recorded at these coordinates today.
    AlreadyExists,
    /// Yesterday had a pearl of the same color here; the user must confirm.
    NeedsConfirmation,
}

/// Result of a list request, distinguishing which filter emptied the list.
#[derive(Debug, Clone, PartialEq)]
pub enum PearlListing {
    Empty,
    NoneInSector(PearlSector),
    NoneWithColor(PearlColor),
    /// Non-empty groups in color display order, each sorted by x then y.
    Grouped(Vec<(PearlColor, Vec<Pearl>)>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity_with_color(color: &str) -> entity::pearl::Model {
        let now = Utc::now();
        entity::pearl::Model {
            id: 1,
            x: 10,
            y: -3,
            color: color.to_string(),
            sector: "top_right".to_string(),
            submitted_by: "scout".to_string(),
            created_at: now,
            day: now.date_naive(),
        }
    }

    #[test]
    fn classifies_sectors_with_zero_as_positive() {
        assert_eq!(PearlSector::from_coordinates(0, 0), PearlSector::BottomRight);
        assert_eq!(PearlSector::from_coordinates(-1, 0), PearlSector::BottomLeft);
        assert_eq!(PearlSector::from_coordinates(0, -1), PearlSector::TopRight);
        assert_eq!(PearlSector::from_coordinates(-160, -160), PearlSector::TopLeft);
    }

    #[test]
    fn sign_labels_match_coordinate_signs() {
        assert_eq!(PearlSector::from_sign_label("(-,+)"), Some(PearlSector::BottomLeft));
        assert_eq!(PearlSector::from_sign_label("(+,+)"), Some(PearlSector::BottomRight));
        assert_eq!(PearlSector::from_sign_label("(-,-)"), Some(PearlSector::TopLeft));
        assert_eq!(PearlSector::from_sign_label("(+,-)"), Some(PearlSector::TopRight));
        assert_eq!(PearlSector::from_sign_label("(0,0)"), None);

        for sector in PearlSector::ALL {
            let x = if sector.sign_label().starts_with("(+") { 1 } else { -1 };
            let y = if sector.sign_label().ends_with("+)") { 1 } else { -1 };
            assert_eq!(PearlSector::from_coordinates(x, y), sector);
        }
    }

    #[test]
    fn sector_follows_coordinates() {
        let pearl = Pearl::from_entity(entity_with_color("red"));
        assert_eq!(pearl.sector(), PearlSector::TopRight);
    }

    #[test]
    fn converts_named_colors_ignoring_case() {
        assert_eq!(Pearl::from_entity(entity_with_color("red")).color, PearlColor::Red);
        assert_eq!(Pearl::from_entity(entity_with_color("Blue")).color, PearlColor::Blue);
    }

    #[test]
    fn converts_textual_colors_through_the_ladder() {
        assert_eq!(Pearl::from_entity(entity_with_color("#00ffff")).color, PearlColor::Cyan);
        assert_eq!(Pearl::from_entity(entity_with_color("16711680")).color, PearlColor::Red);
    }

    #[test]
    fn degrades_unknown_colors_to_white() {
        assert_eq!(Pearl::from_entity(entity_with_color("bogus")).color, PearlColor::White);
        assert_eq!(Pearl::from_entity(entity_with_color("#123456")).color, PearlColor::White);
    }
}
