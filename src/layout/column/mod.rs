//! Column layout management.
//!
//! A column is a vertical slice of the wardrobe holding a stack of items. Item heights are
//! shares of the column's usable height and must sum to 100 whenever the column is non-empty.

mod operations;
mod sizing;

use serde::{Deserialize, Serialize};

use super::item::Item;
use super::normalize;

/// A column of stacked items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Share of the design's usable width, in percent.
    pub width_percentage: f64,
    /// Items from top to bottom. May be empty.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Column {
    pub fn new(width_percentage: f64) -> Self {
        Self {
            width_percentage,
            items: vec![],
        }
    }

    pub fn with_items(width_percentage: f64, items: Vec<Item>) -> Self {
        Self {
            width_percentage,
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, idx: usize) -> Option<&Item> {
        self.items.get(idx)
    }

    /// Sum of the item heights.
    pub fn height_total(&self) -> f64 {
        normalize::total(&self.items)
    }

    /// Sum of the heights of the items above `idx`.
    pub fn height_before(&self, idx: usize) -> f64 {
        let end = idx.min(self.items.len());
        normalize::total(&self.items[..end])
    }
}
