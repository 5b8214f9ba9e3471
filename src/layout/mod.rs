//! Wardrobe layout model and editing engine.
//!
//! A design's interior is a row of columns, each holding a vertical stack of items. All sizes
//! are percentages: column widths are shares of the usable design width and item heights are
//! shares of the column's usable height. An optional top shelf takes a full-width band off the
//! top of the design; the columns split whatever height is left below it.
//!
//! Every operation in this module keeps the following true for the layout it touched:
//!
//! 1. Column widths sum to 100 whenever there is at least one column.
//! 2. Item heights in every non-empty column sum to 100.
//! 3. No percentage is ever negative or NaN.
//! 4. The top shelf stays within `[0, top_shelf_max]`.
//!
//! Operations on [`Layout`] mutate in place and report whether anything changed. [`Design`]
//! wraps them into pure functions that take a design and return a new one, which is what the
//! rest of the program uses.
//!
//! Out-of-range indices and degenerate deltas are not errors. They leave the layout untouched
//! and log at debug level.

use serde::{Deserialize, Serialize};
use wardrobe_config::{Config, ItemDefaults};

pub mod column;
pub mod design;
pub mod edit;
pub mod invariants;
pub mod item;
mod normalize;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use self::column::Column;
pub use self::design::{apply_edit, sanitize_designs, Design};
pub use self::edit::Edit;
pub use self::invariants::Violation;
pub use self::item::Item;
pub use self::normalize::FULL;
pub use self::types::{Dimensions, ItemUpdate, SectionType, Target, Unit};

/// Interior arrangement of one design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Columns from left to right.
    pub columns: Vec<Column>,
    /// Height of the top shelf band as a share of the full design height.
    ///
    /// `None` and `Some(0.)` both mean there is no top shelf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_shelf_height_percentage: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Smallest width a column can be resized to by dragging its edge.
    pub column_width_floor: f64,
    /// Smallest height an item can be resized to by dragging its edge.
    pub item_height_floor: f64,
    /// Width reserved for every other column when a column width is typed in.
    pub update_column_floor: f64,
    /// Height reserved for every other item when an item height is typed in.
    pub update_item_floor: f64,
    pub top_shelf_max: f64,
    pub epsilon: f64,
    pub item_defaults: ItemDefaults,
}

impl Default for Options {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Options {
    pub fn from_config(config: &Config) -> Self {
        let layout = &config.layout;
        Self {
            column_width_floor: layout.column_width_floor.get(),
            item_height_floor: layout.item_height_floor.get(),
            update_column_floor: layout.update_column_floor.get(),
            update_item_floor: layout.update_item_floor.get(),
            top_shelf_max: layout.top_shelf_max.get(),
            epsilon: layout.epsilon.get(),
            item_defaults: config.item_defaults,
        }
    }
}

impl Layout {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            top_shelf_height_percentage: None,
        }
    }

    pub fn with_top_shelf(mut self, percentage: f64) -> Self {
        self.top_shelf_height_percentage = Some(percentage);
        self
    }

    /// Top shelf height in percent, zero when there is none.
    pub fn top_shelf_percentage(&self) -> f64 {
        self.top_shelf_height_percentage.unwrap_or(0.)
    }

    pub fn has_top_shelf(&self) -> bool {
        self.top_shelf_percentage() > 0.
    }

    pub fn column(&self, idx: usize) -> Option<&Column> {
        self.columns.get(idx)
    }

    pub fn item(&self, column_idx: usize, item_idx: usize) -> Option<&Item> {
        self.columns.get(column_idx)?.item(item_idx)
    }

    pub fn item_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    pub fn width_total(&self) -> f64 {
        normalize::total(&self.columns)
    }

    /// Real-unit height of the top shelf band for a design of `dims`.
    pub fn top_shelf_height(&self, dims: &Dimensions) -> f64 {
        dims.height * self.top_shelf_percentage() / FULL
    }

    /// Real-unit height the columns share below the top shelf band.
    pub fn available_height(&self, dims: &Dimensions) -> f64 {
        dims.height - self.top_shelf_height(dims)
    }
}
