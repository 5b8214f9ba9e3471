//! Shared types used across layout modules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wardrobe_config::ItemDefaults;

/// Unit the user entered the wardrobe dimensions in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Mm,
    Ft,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Mm => f.write_str("mm"),
            Unit::Ft => f.write_str("ft"),
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mm" => Ok(Self::Mm),
            "ft" => Ok(Self::Ft),
            _ => Err(format!("unknown unit {s:?}, expected \"mm\" or \"ft\"")),
        }
    }
}

/// External dimensions of the wardrobe.
///
/// Fixed for the whole editing session once layouts have been generated from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub unit: Unit,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, depth: f64, unit: Unit) -> Self {
        Self {
            width,
            height,
            depth,
            unit,
        }
    }

    /// Combines whole feet and extra inches into decimal feet.
    pub fn from_feet_inches(width: (f64, f64), height: (f64, f64), depth: (f64, f64)) -> Self {
        let combine = |(feet, inches): (f64, f64)| feet + inches / 12.;
        Self::new(combine(width), combine(height), combine(depth), Unit::Ft)
    }

    pub fn is_valid(&self) -> bool {
        [self.width, self.height, self.depth]
            .iter()
            .all(|v| v.is_finite() && *v > 0.)
    }

    /// Rounds a real-unit length the way it is displayed for this unit.
    pub fn round(&self, value: f64) -> f64 {
        match self.unit {
            Unit::Mm => value.round(),
            Unit::Ft => (value * 100.).round() / 100.,
        }
    }

    /// Formats a real-unit length for a dimension label.
    pub fn format(&self, value: f64) -> String {
        match self.unit {
            Unit::Mm => format!("{}", self.round(value)),
            Unit::Ft => format!("{}\"", self.round(value)),
        }
    }
}

/// Kind of a wardrobe item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionType {
    Shelf,
    Drawer,
    #[serde(rename = "Hanging Rod")]
    HangingRod,
    #[serde(rename = "Long Shelf")]
    LongShelf,
    #[serde(rename = "Shoe Rack")]
    ShoeRack,
    #[serde(rename = "Empty Space")]
    Empty,
}

impl SectionType {
    pub const ALL: [SectionType; 6] = [
        SectionType::Shelf,
        SectionType::Drawer,
        SectionType::HangingRod,
        SectionType::LongShelf,
        SectionType::ShoeRack,
        SectionType::Empty,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionType::Shelf => "Shelf",
            SectionType::Drawer => "Drawer",
            SectionType::HangingRod => "Hanging Rod",
            SectionType::LongShelf => "Long Shelf",
            SectionType::ShoeRack => "Shoe Rack",
            SectionType::Empty => "Empty Space",
        }
    }

    /// Label given to an item of this kind created by an edit.
    pub fn item_label(self) -> String {
        format!("Added {}", self.name())
    }

    /// Height share a freshly inserted item of this kind starts with.
    pub fn default_height(self, defaults: &ItemDefaults) -> f64 {
        let value = match self {
            SectionType::Shelf => defaults.shelf,
            SectionType::Drawer => defaults.drawer,
            SectionType::HangingRod => defaults.hanging_rod,
            SectionType::LongShelf => defaults.long_shelf,
            SectionType::ShoeRack => defaults.shoe_rack,
            SectionType::Empty => defaults.empty,
        };

        let value = value.get();
        if value > 0. {
            value
        } else {
            DEFAULT_ITEM_HEIGHT
        }
    }
}

/// Height share used when the table has no usable entry for a kind.
pub const DEFAULT_ITEM_HEIGHT: f64 = 10.;

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "shelf" => Ok(Self::Shelf),
            "drawer" => Ok(Self::Drawer),
            "hanging rod" | "rod" => Ok(Self::HangingRod),
            "long shelf" => Ok(Self::LongShelf),
            "shoe rack" => Ok(Self::ShoeRack),
            "empty" | "empty space" => Ok(Self::Empty),
            _ => Err(format!("unknown item type {s:?}")),
        }
    }
}

/// What a column index in an edit refers to.
///
/// Edits address the top shelf band with the column index `-1`; every other valid index is a
/// column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    TopShelf,
    Column(usize),
}

impl Target {
    pub const TOP_SHELF_INDEX: isize = -1;

    /// Decodes a column index, returning `None` for negative indices other than `-1`.
    pub fn from_index(idx: isize) -> Option<Self> {
        if idx == Self::TOP_SHELF_INDEX {
            Some(Self::TopShelf)
        } else {
            usize::try_from(idx).ok().map(Self::Column)
        }
    }

    pub fn index(self) -> isize {
        match self {
            Target::TopShelf => Self::TOP_SHELF_INDEX,
            Target::Column(idx) => isize::try_from(idx).unwrap_or(isize::MAX),
        }
    }
}

/// Field changes requested through the numeric edit path.
///
/// Sizes are in the design's real unit, not percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemUpdate {
    pub kind: Option<SectionType>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.width.is_none() && self.height.is_none()
    }
}
